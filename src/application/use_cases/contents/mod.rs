//! Home Page Use Cases

mod generate_index_page;

pub use generate_index_page::GenerateIndexPageUseCase;
