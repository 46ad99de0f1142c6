use crate::config::HuntConfig;
use crate::errors::ServerError;
use crate::pipeline::HuntHandle;
use crate::responses::{html_response, see_other, xlsx_response, ResultResp};
use crate::spreadsheets::map_data_workbook;
use crate::store::read_map_data;
use crate::templates::components::status_card;
use crate::templates::pages::{dashboard_page, DashboardVm, MapData};
use astra::Request;

/// Shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: HuntConfig,
    pub hunt: HuntHandle,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => dashboard(state),
        ("GET", "/status") => html_response(status_card(&state.hunt.status())),
        ("POST", "/hunt") => start_hunt(state),
        ("GET", "/export") => export(state),
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(state: &AppState) -> ResultResp {
    // A broken data file is shown on the page, not turned into an error response.
    let data = match read_map_data(&state.config.map_data_path) {
        Ok(None) => MapData::NotYet,
        Ok(Some(rows)) => MapData::Rows(rows),
        Err(e) => {
            tracing::warn!(error = %e, "could not read map data");
            MapData::Unreadable(e.to_string())
        }
    };

    let vm = DashboardVm {
        status: state.hunt.status(),
        data,
    };
    html_response(dashboard_page(&vm))
}

fn start_hunt(state: &AppState) -> ResultResp {
    if !state.hunt.start(state.config.clone()) {
        return Err(ServerError::Conflict("a hunt is already running".into()));
    }
    tracing::info!("hunt requested from dashboard");
    see_other("/")
}

fn export(state: &AppState) -> ResultResp {
    let rows = read_map_data(&state.config.map_data_path)?.ok_or(ServerError::NotFound)?;
    let buffer = map_data_workbook(&rows)?;
    xlsx_response(buffer, "fsbo_listings.xlsx")
}
