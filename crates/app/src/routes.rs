//! Declarative routing contract.
//!
//! The guard is evaluated against the current session state, independent of
//! any view tree: a path either renders a route or redirects to the root,
//! and the root itself means dashboard or login depending on auth.

use stockbook_auth::SessionState;
use stockbook_core::RecordId;

/// Every navigable view, by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` when signed in.
    Dashboard,
    /// `/invoice`
    CreateInvoice,
    /// `/saved-invoices`
    SavedInvoices,
    /// `/invoice/:id`
    InvoiceDetail(RecordId),
    /// `/total`
    TotalInventory,
    /// `/return-items`
    ReturnItems,
    /// `/return-history`
    ReturnHistory,
    /// `/return-history/:id`
    ReturnDetail(RecordId),
    /// `/settings`
    Settings,
    /// `/` when signed out.
    Login,
    /// `/signup`
    SignUp,
}

impl Route {
    /// Parse a path into its route. `/` parses as [`Route::Dashboard`]; the
    /// guard decides whether that renders as dashboard or login. Malformed
    /// detail ids do not parse.
    pub fn parse(path: &str) -> Option<Self> {
        let rest = path.strip_prefix('/')?;
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Dashboard),
            ["invoice"] => Some(Route::CreateInvoice),
            ["invoice", id] => id.parse().ok().map(Route::InvoiceDetail),
            ["saved-invoices"] => Some(Route::SavedInvoices),
            ["total"] => Some(Route::TotalInventory),
            ["return-items"] => Some(Route::ReturnItems),
            ["return-history"] => Some(Route::ReturnHistory),
            ["return-history", id] => id.parse().ok().map(Route::ReturnDetail),
            ["settings"] => Some(Route::Settings),
            ["signup"] => Some(Route::SignUp),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard | Route::Login => "/".to_string(),
            Route::CreateInvoice => "/invoice".to_string(),
            Route::SavedInvoices => "/saved-invoices".to_string(),
            Route::InvoiceDetail(id) => format!("/invoice/{id}"),
            Route::TotalInventory => "/total".to_string(),
            Route::ReturnItems => "/return-items".to_string(),
            Route::ReturnHistory => "/return-history".to_string(),
            Route::ReturnDetail(id) => format!("/return-history/{id}"),
            Route::Settings => "/settings".to_string(),
            Route::SignUp => "/signup".to_string(),
        }
    }
}

/// Outcome of the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(&'static str),
}

/// Root path: target of every redirect.
pub const ROOT: &str = "/";

/// Resolve a path for the current session state.
pub fn resolve(path: &str, session: &SessionState) -> Resolution {
    let Some(route) = Route::parse(path) else {
        return Resolution::Redirect(ROOT);
    };

    match session {
        SessionState::SignedIn(_) => match route {
            // An authenticated session has no business on auth screens.
            Route::Login | Route::SignUp => Resolution::Redirect(ROOT),
            other => Resolution::Render(other),
        },
        SessionState::SignedOut => match route {
            Route::Dashboard | Route::Login => Resolution::Render(Route::Login),
            Route::SignUp => Resolution::Render(Route::SignUp),
            _ => Resolution::Redirect(ROOT),
        },
    }
}
