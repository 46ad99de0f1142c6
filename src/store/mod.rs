mod listings_file;
mod map_data_file;
mod store_error;

pub use listings_file::{read_listings, write_listings};
pub use map_data_file::{read_map_data, write_map_data};
pub use store_error::StoreError;
