//! Checkout route handlers.
//!
//! The wizard is loaded from the session, one event is applied, and it is
//! stored again before the page is rendered. Every handler checks the cart
//! first: with no items the empty-cart notice is shown and the session is
//! left alone.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tannery_core::{
    CartSnapshot, CheckoutStep, CheckoutWizard, Field, FieldEdit, OrderSummary, SHIPPING_RATES,
    STATE_OPTIONS, StepProgress,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::CspNonce;
use crate::models::session_keys;
use crate::services::OrderConfirmation;
use crate::state::AppState;

// =============================================================================
// View Models
// =============================================================================

/// One bubble of the progress indicator.
#[derive(Clone)]
pub struct StepView {
    pub number: usize,
    pub title: &'static str,
    pub current: bool,
    pub reached: bool,
    /// Whether a connector line follows this step.
    pub has_connector: bool,
    pub connector_filled: bool,
}

impl From<StepProgress> for StepView {
    fn from(progress: StepProgress) -> Self {
        Self {
            number: progress.number,
            title: progress.step.title(),
            current: progress.current,
            reached: progress.reached(),
            has_connector: !progress.step.is_last(),
            connector_filled: progress.completed,
        }
    }
}

/// A text input with its current value and validation message.
#[derive(Clone)]
pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
}

/// An option of the state selector.
#[derive(Clone)]
pub struct StateOptionView {
    pub code: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

/// A shipping rate radio button.
#[derive(Clone)]
pub struct RateView {
    pub id: &'static str,
    pub title: &'static str,
    pub price_label: String,
    pub description: &'static str,
    pub checked: bool,
}

/// Everything the shipping step renders.
#[derive(Clone)]
pub struct ShippingFormView {
    pub email: FieldView,
    pub first_name: FieldView,
    pub last_name: FieldView,
    pub address1: FieldView,
    pub city: FieldView,
    pub state: FieldView,
    pub zip: FieldView,
    pub states: Vec<StateOptionView>,
    pub rates: Vec<RateView>,
    pub shipping_error: Option<String>,
}

impl ShippingFormView {
    fn new(wizard: &CheckoutWizard) -> Self {
        let data = wizard.data();
        let address = &data.shipping_address;
        let errors = wizard.errors();
        let field = |field: Field, value: &str| FieldView {
            value: value.to_string(),
            error: errors.get(field).map(str::to_string),
        };
        let selected = wizard.selected_shipping().map(|rate| rate.id);

        Self {
            email: field(Field::Email, &data.email),
            first_name: field(Field::FirstName, &address.first_name),
            last_name: field(Field::LastName, &address.last_name),
            address1: field(Field::Address1, &address.address1),
            city: field(Field::City, &address.city),
            state: field(Field::State, &address.state),
            zip: field(Field::Zip, &address.zip),
            states: STATE_OPTIONS
                .iter()
                .map(|&(code, name)| StateOptionView {
                    code,
                    name,
                    selected: address.state == code,
                })
                .collect(),
            rates: SHIPPING_RATES
                .iter()
                .map(|rate| RateView {
                    id: rate.id.as_str(),
                    title: rate.title,
                    price_label: rate.price_label(),
                    description: rate.description,
                    checked: selected == Some(rate.id),
                })
                .collect(),
            shipping_error: errors.get(Field::Shipping).map(str::to_string),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Checkout wizard page.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub nonce: String,
    pub steps: Vec<StepView>,
    pub step_id: &'static str,
    pub shipping: ShippingFormView,
    pub same_as_shipping: bool,
    pub summary: OrderSummary,
    pub order_error: Option<String>,
    pub can_go_back: bool,
    pub is_last_step: bool,
}

impl CheckoutTemplate {
    fn new(
        wizard: &CheckoutWizard,
        cart: &CartSnapshot,
        nonce: String,
        order_error: Option<String>,
    ) -> Self {
        let step = wizard.step();
        Self {
            nonce,
            steps: wizard.progress().into_iter().map(StepView::from).collect(),
            step_id: step.id(),
            shipping: ShippingFormView::new(wizard),
            same_as_shipping: wizard.data().same_as_shipping,
            summary: wizard.summary(cart),
            order_error,
            can_go_back: !step.is_first(),
            is_last_step: step.is_last(),
        }
    }
}

/// Shown instead of the wizard when the cart has no items.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/empty.html")]
pub struct EmptyCartTemplate {
    pub nonce: String,
}

/// Shown after an order is placed.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub nonce: String,
    pub order_number: String,
    pub email: String,
    pub total: Decimal,
}

impl ConfirmationTemplate {
    fn new(confirmation: OrderConfirmation, nonce: String) -> Self {
        Self {
            nonce,
            order_number: confirmation.order_number.to_string(),
            email: confirmation.email,
            total: confirmation.total,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the wizard from the session, starting fresh if there is none.
async fn load_wizard(session: &Session) -> Result<CheckoutWizard> {
    let wizard = session
        .get::<CheckoutWizard>(session_keys::CHECKOUT)
        .await?
        .unwrap_or_else(|| {
            tracing::debug!("No checkout in session, starting a new one");
            CheckoutWizard::new()
        });
    Ok(wizard)
}

/// Save the wizard to the session.
async fn store_wizard(session: &Session, wizard: &CheckoutWizard) -> Result<()> {
    session.insert(session_keys::CHECKOUT, wizard).await?;
    Ok(())
}

// =============================================================================
// Form Handling
// =============================================================================

/// Single field edit posted by the controlled inputs.
#[derive(Debug, Deserialize)]
pub struct FieldForm {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Apply the fields a step's form submits.
///
/// The shipping step submits its inputs and the selected rate. The payment
/// step submits only the billing checkbox, which is absent when unchecked.
/// The card inputs have no names and never reach the server.
fn apply_step_form(wizard: &mut CheckoutWizard, fields: Vec<(String, String)>) {
    match wizard.step() {
        CheckoutStep::Shipping => {
            for (name, value) in fields {
                match FieldEdit::from_form(&name, value) {
                    Some(FieldEdit::SameAsShipping(_)) | None => {}
                    Some(edit) => {
                        if !wizard.apply(edit) {
                            tracing::debug!(field = %name, "Ignored unknown shipping rate");
                        }
                    }
                }
            }
        }
        CheckoutStep::Payment => {
            let same_as_shipping = fields
                .into_iter()
                .find(|(name, _)| name == "same_as_shipping")
                .and_then(|(name, value)| FieldEdit::from_form(&name, value))
                .unwrap_or(FieldEdit::SameAsShipping(false));
            wizard.apply(same_as_shipping);
        }
        CheckoutStep::Review => {}
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Open the checkout with a fresh wizard.
#[instrument(skip(state, session, nonce))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
) -> Result<Response> {
    let cart = state.cart().cart();
    if cart.is_empty() {
        return Ok(EmptyCartTemplate { nonce }.into_response());
    }

    let wizard = CheckoutWizard::new();
    store_wizard(&session, &wizard).await?;
    add_breadcrumb("checkout", "Checkout opened", None);

    Ok(CheckoutTemplate::new(&wizard, &cart, nonce, None).into_response())
}

/// Apply one field edit.
///
/// Returns 204 on success. Validation does not run here.
///
/// # Errors
///
/// Returns 409 when the cart is empty and 400 for unknown fields or rates.
#[instrument(skip(state, session, form), fields(field = %form.name))]
pub async fn field(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<FieldForm>,
) -> Result<StatusCode> {
    if state.cart().cart().is_empty() {
        return Err(AppError::Conflict("cart is empty".to_string()));
    }

    let Some(edit) = FieldEdit::from_form(&form.name, form.value) else {
        return Err(AppError::BadRequest(format!("unknown field: {}", form.name)));
    };

    let mut wizard = load_wizard(&session).await?;
    if !wizard.apply(edit) {
        return Err(AppError::BadRequest("unknown shipping rate".to_string()));
    }
    store_wizard(&session, &wizard).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Apply the step's form and advance if it validates.
#[instrument(skip(state, session, nonce, fields))]
pub async fn next(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let cart = state.cart().cart();
    if cart.is_empty() {
        return Ok(EmptyCartTemplate { nonce }.into_response());
    }

    let mut wizard = load_wizard(&session).await?;
    apply_step_form(&mut wizard, fields);

    let from = wizard.step();
    if wizard.handle_next() {
        let to = wizard.step();
        tracing::info!(from = from.id(), to = to.id(), "Checkout advanced");
        add_breadcrumb(
            "checkout",
            "Advanced",
            Some(&[("from", from.id()), ("to", to.id())]),
        );
    } else {
        tracing::debug!(
            step = from.id(),
            errors = wizard.errors().len(),
            "Checkout step not advanced"
        );
    }
    store_wizard(&session, &wizard).await?;

    Ok(CheckoutTemplate::new(&wizard, &cart, nonce, None).into_response())
}

/// Apply the step's form and go back one step without validating.
#[instrument(skip(state, session, nonce, fields))]
pub async fn previous(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let cart = state.cart().cart();
    if cart.is_empty() {
        return Ok(EmptyCartTemplate { nonce }.into_response());
    }

    let mut wizard = load_wizard(&session).await?;
    apply_step_form(&mut wizard, fields);

    let from = wizard.step();
    if wizard.handle_previous() {
        add_breadcrumb(
            "checkout",
            "Went back",
            Some(&[("from", from.id()), ("to", wizard.step().id())]),
        );
    }
    store_wizard(&session, &wizard).await?;

    Ok(CheckoutTemplate::new(&wizard, &cart, nonce, None).into_response())
}

/// Place the order from the review step.
///
/// On success the wizard is removed from the session and the confirmation
/// page is shown. On failure the review step is shown again with the reason.
#[instrument(skip(state, session, nonce))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
) -> Result<Response> {
    let cart = state.cart().cart();
    if cart.is_empty() {
        return Ok(EmptyCartTemplate { nonce }.into_response());
    }

    let mut wizard = load_wizard(&session).await?;
    let placed = wizard
        .handle_submit(&cart)
        .and_then(|order| state.orders().place(&order));

    match placed {
        Ok(confirmation) => {
            session
                .remove::<CheckoutWizard>(session_keys::CHECKOUT)
                .await?;
            tracing::info!(order_number = %confirmation.order_number, "Order placed");
            add_breadcrumb("checkout", "Order placed", None);
            Ok(ConfirmationTemplate::new(confirmation, nonce).into_response())
        }
        Err(e) => {
            tracing::warn!(error = %e, step = wizard.step().id(), "Order not placed");
            store_wizard(&session, &wizard).await?;
            Ok(CheckoutTemplate::new(&wizard, &cart, nonce, Some(e.to_string())).into_response())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use tannery_core::{
        CartItem, CartProduct, CartVariant, OrderError, OrderRequest, Personalization,
        ShippingRateId,
    };
    use tower_sessions::MemoryStore;
    use url::Url;

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::services::{FixtureCartProvider, LoggingOrderPlacer, OrderPlacer};

    struct DecliningOrderPlacer;

    impl OrderPlacer for DecliningOrderPlacer {
        fn place(
            &self,
            _order: &OrderRequest,
        ) -> std::result::Result<OrderConfirmation, OrderError> {
            Err(OrderError::Rejected("card declined".to_string()))
        }
    }

    fn config() -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: Url::parse("http://localhost:3000").unwrap(),
            cart_file: None,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }

    fn cart() -> CartSnapshot {
        CartSnapshot {
            items: vec![CartItem {
                id: "line-1".to_string(),
                product: CartProduct {
                    title: "Bifold Wallet".to_string(),
                    handle: "bifold-wallet".to_string(),
                },
                variant: CartVariant {
                    title: "Chestnut".to_string(),
                    price: Decimal::from(50),
                },
                quantity: 2,
                personalization: Some(Personalization {
                    text: "A.L.".to_string(),
                }),
            }],
            subtotal: Decimal::from(130),
            tax: Decimal::new(1040, 2),
            total: Decimal::new(14040, 2),
        }
    }

    fn app_state(cart: CartSnapshot) -> AppState {
        AppState::with_services(
            config(),
            Arc::new(FixtureCartProvider::new(cart)),
            Arc::new(LoggingOrderPlacer),
        )
    }

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn nonce() -> CspNonce {
        CspNonce("test-nonce".to_string())
    }

    fn shipping_fields() -> Vec<(String, String)> {
        [
            ("email", "ada@example.com"),
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("address1", "1 Analytical Way"),
            ("city", "Los Angeles"),
            ("state", "CA"),
            ("zip", "90001"),
            ("shipping", "express"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    async fn body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn stored(session: &Session) -> Option<CheckoutWizard> {
        session
            .get::<CheckoutWizard>(session_keys::CHECKOUT)
            .await
            .unwrap()
    }

    async fn advance_to_review(state: &AppState, session: &Session) {
        next(State(state.clone()), session.clone(), nonce(), Form(shipping_fields()))
            .await
            .unwrap();
        let payment = vec![("same_as_shipping".to_string(), "on".to_string())];
        next(State(state.clone()), session.clone(), nonce(), Form(payment))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_cart_shows_notice_and_skips_wizard() {
        let state = app_state(CartSnapshot::default());
        let session = session();

        let response = show(State(state.clone()), session.clone(), nonce())
            .await
            .unwrap();
        let html = body(response).await;
        assert!(html.contains("Your cart is empty"));
        assert!(html.contains("/collections/all"));
        assert!(stored(&session).await.is_none());

        let response = place_order(State(state), session.clone(), nonce())
            .await
            .unwrap();
        assert!(body(response).await.contains("Your cart is empty"));
        assert!(stored(&session).await.is_none());
    }

    #[tokio::test]
    async fn test_show_starts_fresh_wizard() {
        let state = app_state(cart());
        let session = session();

        let mut old = CheckoutWizard::new();
        old.apply(FieldEdit::Email("stale@example.com".to_string()));
        store_wizard(&session, &old).await.unwrap();

        let response = show(State(state), session.clone(), nonce()).await.unwrap();
        let html = body(response).await;
        assert!(html.contains("Shipping Information"));
        assert!(!html.contains("stale@example.com"));
        assert_eq!(stored(&session).await, Some(CheckoutWizard::new()));
    }

    #[tokio::test]
    async fn test_next_with_empty_form_shows_errors() {
        let state = app_state(cart());
        let session = session();

        let response = next(State(state), session.clone(), nonce(), Form(Vec::new()))
            .await
            .unwrap();
        let html = body(response).await;
        assert!(html.contains("Email is required"));
        assert!(html.contains("ZIP code is required"));
        assert!(html.contains("Please select a shipping method"));

        let wizard = stored(&session).await.unwrap();
        assert_eq!(wizard.step(), CheckoutStep::Shipping);
        assert_eq!(wizard.errors().len(), 8);
    }

    #[tokio::test]
    async fn test_state_selector_starts_on_placeholder() {
        let response = show(State(app_state(cart())), session(), nonce())
            .await
            .unwrap();
        let html = body(response).await;

        let select = html
            .split("<select id=\"state\"")
            .nth(1)
            .and_then(|rest| rest.split("</select>").next())
            .unwrap();
        let first = select.split("<option").nth(1).unwrap();
        assert!(first.starts_with(" value=\"\" selected>Select State</option>"));
        assert!(!select.contains("value=\"CA\" selected"));
    }

    #[tokio::test]
    async fn test_next_with_placeholder_state_is_blocked() {
        let state = app_state(cart());
        let session = session();

        let mut fields = shipping_fields();
        fields.retain(|(name, _)| name != "state");
        fields.push(("state".to_string(), String::new()));

        let response = next(State(state), session.clone(), nonce(), Form(fields))
            .await
            .unwrap();
        let html = body(response).await;
        assert!(html.contains("State is required"));

        let wizard = stored(&session).await.unwrap();
        assert_eq!(wizard.step(), CheckoutStep::Shipping);
        assert_eq!(wizard.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_next_with_complete_form_reaches_payment() {
        let state = app_state(cart());
        let session = session();

        let response = next(State(state), session.clone(), nonce(), Form(shipping_fields()))
            .await
            .unwrap();
        let html = body(response).await;
        assert!(html.contains("Payment Information"));
        assert!(!html.contains("is required"));

        let wizard = stored(&session).await.unwrap();
        assert_eq!(wizard.step(), CheckoutStep::Payment);
        assert_eq!(
            wizard.selected_shipping().map(|rate| rate.id),
            Some(ShippingRateId::Express)
        );
    }

    #[tokio::test]
    async fn test_previous_is_noop_on_shipping_and_goes_back_from_payment() {
        let state = app_state(cart());
        let session = session();

        previous(State(state.clone()), session.clone(), nonce(), Form(Vec::new()))
            .await
            .unwrap();
        assert_eq!(stored(&session).await.unwrap().step(), CheckoutStep::Shipping);

        next(State(state.clone()), session.clone(), nonce(), Form(shipping_fields()))
            .await
            .unwrap();
        previous(State(state), session.clone(), nonce(), Form(Vec::new()))
            .await
            .unwrap();

        let wizard = stored(&session).await.unwrap();
        assert_eq!(wizard.step(), CheckoutStep::Shipping);
        // Going back from payment without the checkbox unticks it
        assert!(!wizard.data().same_as_shipping);
    }

    #[tokio::test]
    async fn test_field_edit_updates_one_field() {
        let state = app_state(cart());
        let session = session();

        let form = FieldForm {
            name: "city".to_string(),
            value: "Austin".to_string(),
        };
        let status = field(State(state), session.clone(), Form(form))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let wizard = stored(&session).await.unwrap();
        assert_eq!(wizard.data().shipping_address.city, "Austin");
        assert!(wizard.data().email.is_empty());
        assert!(wizard.errors().is_empty());
    }

    #[tokio::test]
    async fn test_field_edit_rejections() {
        let session = session();

        let form = FieldForm {
            name: "card_number".to_string(),
            value: "4242424242424242".to_string(),
        };
        let err = field(State(app_state(cart())), session.clone(), Form(form))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let form = FieldForm {
            name: "shipping".to_string(),
            value: "teleport".to_string(),
        };
        let err = field(State(app_state(cart())), session.clone(), Form(form))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let form = FieldForm {
            name: "city".to_string(),
            value: "Austin".to_string(),
        };
        let err = field(State(app_state(CartSnapshot::default())), session, Form(form))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_review_shows_totals_with_express_shipping() {
        let state = app_state(cart());
        let session = session();

        next(State(state.clone()), session.clone(), nonce(), Form(shipping_fields()))
            .await
            .unwrap();
        let payment = vec![("same_as_shipping".to_string(), "on".to_string())];
        let response = next(State(state), session.clone(), nonce(), Form(payment))
            .await
            .unwrap();
        let html = body(response).await;

        assert!(html.contains("Review Your Order"));
        assert!(html.contains("Personalization: A.L."));
        // (50 + 15) x 2
        assert!(html.contains("$130.00"));
        assert!(html.contains("$10.40"));
        // 140.40 + 20 express
        assert!(html.contains("$160.40"));
        assert!(html.contains("Place Order"));
    }

    #[tokio::test]
    async fn test_place_order_confirms_and_clears_session() {
        let state = app_state(cart());
        let session = session();
        advance_to_review(&state, &session).await;

        let response = place_order(State(state), session.clone(), nonce())
            .await
            .unwrap();
        let html = body(response).await;
        assert!(html.contains("Order placed successfully!"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("$160.40"));
        assert!(stored(&session).await.is_none());
    }

    #[tokio::test]
    async fn test_place_order_accepts_any_non_empty_email() {
        let state = app_state(cart());
        let session = session();

        let mut fields = shipping_fields();
        fields.retain(|(name, _)| name != "email");
        fields.push(("email".to_string(), "ada.example.com".to_string()));
        next(State(state.clone()), session.clone(), nonce(), Form(fields))
            .await
            .unwrap();
        let payment = vec![("same_as_shipping".to_string(), "on".to_string())];
        next(State(state.clone()), session.clone(), nonce(), Form(payment))
            .await
            .unwrap();

        let response = place_order(State(state), session.clone(), nonce())
            .await
            .unwrap();
        let html = body(response).await;
        assert!(html.contains("Order placed successfully!"));
        assert!(html.contains("ada.example.com"));
        assert!(stored(&session).await.is_none());
    }

    #[tokio::test]
    async fn test_declined_order_keeps_form_data() {
        let state = AppState::with_services(
            config(),
            Arc::new(FixtureCartProvider::new(cart())),
            Arc::new(DecliningOrderPlacer),
        );
        let session = session();
        advance_to_review(&state, &session).await;

        let response = place_order(State(state), session.clone(), nonce())
            .await
            .unwrap();
        let html = body(response).await;
        assert!(html.contains("place your order: card declined"));
        assert!(html.contains("Review Your Order"));

        let wizard = stored(&session).await.unwrap();
        assert_eq!(wizard.step(), CheckoutStep::Review);
        assert_eq!(wizard.data().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_place_order_before_review_is_rejected() {
        let state = app_state(cart());
        let session = session();

        let response = place_order(State(state), session.clone(), nonce())
            .await
            .unwrap();
        let html = body(response).await;
        assert!(html.contains("orders can only be placed from the review step"));
        assert!(html.contains("Shipping Information"));
        assert_eq!(stored(&session).await.unwrap().step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_progress_view_follows_step() {
        let mut wizard = CheckoutWizard::new();
        for (name, value) in shipping_fields() {
            wizard.apply(FieldEdit::from_form(&name, value).unwrap());
        }
        wizard.handle_next();

        let view = CheckoutTemplate::new(&wizard, &cart(), String::new(), None);
        let reached: Vec<_> = view.steps.iter().map(|s| s.reached).collect();
        assert_eq!(reached, [true, true, false]);
        assert!(view.steps[1].current);
        assert!(view.steps[0].connector_filled);
        assert!(!view.steps[2].has_connector);
        assert!(view.can_go_back);
        assert!(!view.is_last_step);
    }

    #[test]
    fn test_apply_step_form_ignores_checkbox_on_shipping_step() {
        let mut wizard = CheckoutWizard::new();
        let fields = vec![
            ("same_as_shipping".to_string(), "false".to_string()),
            ("zip".to_string(), "10001".to_string()),
        ];
        apply_step_form(&mut wizard, fields);
        assert!(wizard.data().same_as_shipping);
        assert_eq!(wizard.data().shipping_address.zip, "10001");
    }
}
