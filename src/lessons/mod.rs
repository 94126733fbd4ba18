mod address_of;
mod array_walk;
mod mutate_through;

pub use address_of::AddressOf;
pub use array_walk::ArrayWalk;
pub use mutate_through::MutateThrough;

pub(crate) const SAMPLE_NAME: &str = "Emerson";
pub(crate) const RENAMED: &str = "Rogers";
pub(crate) const SAMPLE_ARRAY: [i32; 5] = [1, 2, 3, 4, 5];
