//! Checkout
//!
//! Turns a cart snapshot and the customer's contact details into an order
//! summary, and hands it to a [`MailSink`] as a subject/body pair. Delivery
//! is not confirmed.

use std::io;

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::{debug, info};

use crate::{cart::CartDocument, pricing};

/// Checkout Errors
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no line items.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// The mail sink failed to accept the message.
    #[error("Failed to hand off order: {0}")]
    Sink(#[from] io::Error),
}

/// Customer contact details. Passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    /// Customer name
    pub name: String,

    /// Customer e-mail address
    pub email: String,

    /// Street address
    pub address: String,

    /// Postal code
    pub zip: String,

    /// City
    pub city: String,
}

/// A composed but unsent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    /// Address receiving the order
    pub recipient: String,

    /// Message subject
    pub subject: String,

    /// Message body
    pub body: String,
}

impl MailDraft {
    /// Render the draft as a `mailto:` URI with encoded subject and body.
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Something able to compose an e-mail from a draft.
#[cfg_attr(test, mockall::automock)]
pub trait MailSink {
    /// Hand the draft over for composition.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the draft could not be handed over.
    fn compose(&mut self, draft: &MailDraft) -> io::Result<()>;
}

/// Writes the `mailto:` URI for each draft to a writer.
#[derive(Debug)]
pub struct MailtoWriter<W: io::Write> {
    out: W,
}

impl<W: io::Write> MailtoWriter<W> {
    /// Create a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> MailSink for MailtoWriter<W> {
    fn compose(&mut self, draft: &MailDraft) -> io::Result<()> {
        writeln!(self.out, "{}", draft.mailto_uri())
    }
}

/// Checkout
#[derive(Debug, Clone)]
pub struct Checkout {
    shop_name: String,
    order_email: String,
    currency: &'static Currency,
}

impl Checkout {
    /// Create a checkout sending orders for `shop_name` to `order_email`.
    pub fn new(
        shop_name: impl Into<String>,
        order_email: impl Into<String>,
        currency: &'static Currency,
    ) -> Self {
        Self {
            shop_name: shop_name.into(),
            order_email: order_email.into(),
            currency,
        }
    }

    /// Subject line of order messages.
    pub fn subject(&self) -> String {
        format!("{} order", self.shop_name)
    }

    /// Plain-text order summary.
    pub fn summary(&self, cart: &CartDocument, contact: &ContactDetails) -> String {
        let mut lines = vec![
            self.subject(),
            String::new(),
            format!("Customer: {}", contact.name),
            format!("Email: {}", contact.email),
            format!(
                "Address: {}, {} {}",
                contact.address, contact.zip, contact.city
            ),
            String::new(),
            "Items:".to_string(),
        ];

        lines.extend(cart.items().iter().map(|item| {
            format!(
                "- {} x{} = {}",
                item.name,
                item.qty,
                pricing::money(item.line_total(), self.currency)
            )
        }));

        lines.extend([
            String::new(),
            format!(
                "Total: {}",
                pricing::money(cart.total_price(), self.currency)
            ),
            String::new(),
            "---".to_string(),
            format!(
                "Message generated automatically by the {} website",
                self.shop_name
            ),
        ]);

        lines.join("\n")
    }

    /// Compose the order message for a cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no line items.
    pub fn draft(
        &self,
        cart: &CartDocument,
        contact: &ContactDetails,
    ) -> Result<MailDraft, CheckoutError> {
        if cart.is_empty() {
            debug!("refusing checkout of empty cart");

            return Err(CheckoutError::EmptyCart);
        }

        Ok(MailDraft {
            recipient: self.order_email.clone(),
            subject: self.subject(),
            body: self.summary(cart, contact),
        })
    }

    /// Compose the order message and hand it to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no line items, in
    /// which case the sink is not called, or [`CheckoutError::Sink`] if the
    /// sink fails.
    pub fn submit(
        &self,
        cart: &CartDocument,
        contact: &ContactDetails,
        sink: &mut impl MailSink,
    ) -> Result<MailDraft, CheckoutError> {
        let draft = self.draft(cart, contact)?;

        sink.compose(&draft)?;

        info!(
            recipient = %draft.recipient,
            lines = cart.len(),
            total = cart.total_price(),
            "order handed off"
        );

        Ok(draft)
    }
}
