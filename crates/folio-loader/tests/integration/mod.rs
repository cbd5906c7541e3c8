mod page;
mod sections;
