pub mod commanders;
