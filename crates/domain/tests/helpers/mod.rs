mod builders;

pub use builders::ConfigBuilder;
