pub mod articles;
