// File: src/routes.rs
// Purpose: HTMX endpoints forwarding widget events to the hosted form

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use dataform::{
    control_name, DataForm, FormConfiguration, FormError, FormResult, FormValues, Render,
    SubmitOutcome,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Header htmx listens on to fire client-side events
const HX_TRIGGER: &str = "HX-Trigger";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    form: Arc<Mutex<DataForm>>,
    submissions: Arc<Mutex<Vec<FormValues>>>,
}

impl AppState {
    /// Build and mount the hosted form
    ///
    /// Widgets post their events back to this server, so an unset event base
    /// is rooted at `/`. Accepted values are recorded by `submit_handler`
    /// from the submit outcome.
    pub fn new(mut config: FormConfiguration) -> Self {
        config.event_base.get_or_insert_with(String::new);

        let mut form = DataForm::new(config, |values: &FormValues| {
            debug!(fields = values.len(), "submit handler called");
        });
        form.mount();

        Self {
            form: Arc::new(Mutex::new(form)),
            submissions: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/fields/:id/change", post(change_handler))
        .route("/fields/:id/blur", post(blur_handler))
        .route("/submit", post(submit_handler))
        .route("/submissions", get(submissions_handler))
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let form = state.form.lock().await;

    let markup = maud::html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "dataform" }
                script src="https://unpkg.com/htmx.org@1.9.12" {}
            }
            body {
                h1 { "dataform" }
                (&*form)
            }
        }
    };
    Html(markup.into_string())
}

async fn change_handler(
    State(state): State<AppState>,
    Path(id): Path<usize>,
    Form(body): Form<HashMap<String, String>>,
) -> Response {
    let mut form = state.form.lock().await;

    let value = match posted_value(&form, id, &body) {
        Ok(value) => value.or_else(|| body.get("value").cloned()),
        Err(e) => return form_error_response(e),
    };

    if let Err(e) = form.change(id, value.unwrap_or_default()) {
        return form_error_response(e);
    }
    render_form(&form)
}

/// Validate one field against the value the browser holds
///
/// htmx posts the enclosing form with the focusout event, so the control's
/// current value is applied first. A pending change request may not have
/// reached the server yet.
async fn blur_handler(
    State(state): State<AppState>,
    Path(id): Path<usize>,
    Form(body): Form<HashMap<String, String>>,
) -> Response {
    let mut form = state.form.lock().await;

    let result = posted_value(&form, id, &body).and_then(|value| {
        if let Some(value) = value {
            form.change(id, value)?;
        }
        form.blur(id)
    });

    match result {
        Ok(_) => render_form(&form),
        Err(e) => form_error_response(e),
    }
}

/// Apply the posted values, then submit
///
/// Values arrive for every control in the form; each one present is applied
/// as a change before validation runs.
async fn submit_handler(
    State(state): State<AppState>,
    Form(body): Form<HashMap<String, String>>,
) -> Response {
    let mut form = state.form.lock().await;

    let posted: Vec<(usize, String)> = form
        .fields()
        .iter()
        .enumerate()
        .filter_map(|(id, field)| {
            body.get(&control_name(field, id))
                .map(|value| (id, value.clone()))
        })
        .collect();
    for (id, value) in posted {
        if let Err(e) = form.change(id, value) {
            return form_error_response(e);
        }
    }

    let outcome = form.submit();
    let markup = form.render().into_string();
    match outcome {
        SubmitOutcome::Submitted(values) => {
            let mut stored = state.submissions.lock().await;
            stored.push(values);
            info!(total = stored.len(), "Submission accepted");
            ([(HX_TRIGGER, "form-submitted")], Html(markup)).into_response()
        }
        SubmitOutcome::Rejected { .. } => Html(markup).into_response(),
    }
}

async fn submissions_handler(State(state): State<AppState>) -> Json<Vec<FormValues>> {
    Json(state.submissions.lock().await.clone())
}

/// Value posted under field `id`'s control name, if any
fn posted_value(
    form: &DataForm,
    id: usize,
    body: &HashMap<String, String>,
) -> FormResult<Option<String>> {
    let field = form.field(id)?;
    Ok(body.get(&control_name(field, id)).cloned())
}

fn render_form(form: &DataForm) -> Response {
    Html(form.render().into_string()).into_response()
}

fn form_error_response(err: FormError) -> Response {
    (StatusCode::NOT_FOUND, err.to_string()).into_response()
}
