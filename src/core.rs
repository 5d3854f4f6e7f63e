pub mod bookshop;
pub mod controller;
pub mod domain;
pub mod repository;
