pub mod markup;
pub mod null;
