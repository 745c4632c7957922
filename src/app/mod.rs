pub mod layouts;
pub mod navigation;
pub mod pages;

pub use pages::App;
