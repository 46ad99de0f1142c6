pub mod export_xlsx;

pub use export_xlsx::map_data_workbook;
