pub mod carousels;
pub mod catalog;
pub mod events;
pub mod layers;
pub mod pages;
pub mod placeholder;
pub mod roadmap;
pub mod site;
