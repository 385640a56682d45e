//! Area Lookup Use Cases

mod get_area;
mod list_provinces;

pub use get_area::GetAreaUseCase;
pub use list_provinces::ListProvincesUseCase;
