//! Symbolic icon names and their fixed glyph set.
//!
//! Records reference icons by string name (`"Trophy"`, `"Database"`, ...).
//! The set of recognized names is closed; anything else resolves to
//! [`Glyph::DEFAULT`] so a typo in stored content can never fail a render.

use std::fmt;

/// A recognized icon glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Glyph {
    /// Generic code brackets; also the fallback glyph.
    Code,
    /// Stacked layers.
    Layers,
    /// Database cylinder.
    Database,
    /// Cloud outline.
    Cloud,
    /// Wrench.
    Wrench,
    /// Lightning bolt.
    Zap,
    /// Alternate code brackets.
    Code2,
    /// Trophy cup.
    Trophy,
    /// Rocket.
    Rocket,
    /// Award rosette.
    Award,
    /// Envelope.
    Mail,
    /// Telephone handset.
    Phone,
    /// Map pin.
    MapPin,
    /// GitHub mark.
    Github,
    /// LinkedIn mark.
    Linkedin,
    /// Briefcase.
    Briefcase,
    /// Calendar page.
    Calendar,
    /// Graduation cap.
    GraduationCap,
}

impl Glyph {
    /// Glyph substituted for unrecognized icon names.
    pub const DEFAULT: Glyph = Glyph::Code;

    /// Resolves a symbolic icon name to its glyph.
    ///
    /// Unknown names resolve to [`Glyph::DEFAULT`]; resolution never fails.
    pub fn resolve(name: &str) -> Glyph {
        match name {
            "Code" => Glyph::Code,
            "Layers" => Glyph::Layers,
            "Database" => Glyph::Database,
            "Cloud" => Glyph::Cloud,
            "Wrench" => Glyph::Wrench,
            "Zap" => Glyph::Zap,
            "Code2" => Glyph::Code2,
            "Trophy" => Glyph::Trophy,
            "Rocket" => Glyph::Rocket,
            "Award" => Glyph::Award,
            "Mail" => Glyph::Mail,
            "Phone" => Glyph::Phone,
            "MapPin" => Glyph::MapPin,
            "Github" => Glyph::Github,
            "Linkedin" => Glyph::Linkedin,
            "Briefcase" => Glyph::Briefcase,
            "Calendar" => Glyph::Calendar,
            "GraduationCap" => Glyph::GraduationCap,
            _ => Glyph::DEFAULT,
        }
    }

    /// Canonical name of this glyph, as stored in record `icon` fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Code => "Code",
            Glyph::Layers => "Layers",
            Glyph::Database => "Database",
            Glyph::Cloud => "Cloud",
            Glyph::Wrench => "Wrench",
            Glyph::Zap => "Zap",
            Glyph::Code2 => "Code2",
            Glyph::Trophy => "Trophy",
            Glyph::Rocket => "Rocket",
            Glyph::Award => "Award",
            Glyph::Mail => "Mail",
            Glyph::Phone => "Phone",
            Glyph::MapPin => "MapPin",
            Glyph::Github => "Github",
            Glyph::Linkedin => "Linkedin",
            Glyph::Briefcase => "Briefcase",
            Glyph::Calendar => "Calendar",
            Glyph::GraduationCap => "GraduationCap",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
