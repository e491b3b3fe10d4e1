use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    let page = error_view(
        "Página não encontrada",
        "404",
        "Página não encontrada",
        "O endereço que você acessou não existe.",
    );

    (StatusCode::NOT_FOUND, page).into_response()
}
