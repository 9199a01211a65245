mod app;
pub use app::{Playdeck, open_backend};
