pub mod image;
pub mod iterator;
pub mod pixel;

pub mod prelude {
    pub use super::iterator::GridIterator;
    pub use super::pixel::Rgb;
}
