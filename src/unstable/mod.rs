pub mod quicksort;
pub mod rotation;
