pub mod name_store;

pub use name_store::NameStore;
