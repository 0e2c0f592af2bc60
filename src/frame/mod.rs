pub mod normalize;
pub mod raw_frame;
pub mod tensor;
