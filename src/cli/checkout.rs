use std::io;

use cisko::{
    cart::CartStore,
    checkout::{Checkout, ContactDetails, MailtoWriter},
    storage::CartStorage,
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Customer name
    #[arg(long)]
    name: String,

    /// Customer e-mail address
    #[arg(long)]
    email: String,

    /// Street address
    #[arg(long)]
    address: String,

    /// Postal code
    #[arg(long)]
    zip: String,

    /// City
    #[arg(long)]
    city: String,
}

impl From<CheckoutArgs> for ContactDetails {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            address: args.address,
            zip: args.zip,
            city: args.city,
        }
    }
}

pub(crate) fn run<S: CartStorage>(
    out: &mut impl io::Write,
    store: &CartStore<'_, S>,
    checkout: &Checkout,
    args: CheckoutArgs,
) -> anyhow::Result<()> {
    let contact = ContactDetails::from(args);

    checkout.submit(store.document(), &contact, &mut MailtoWriter::new(out))?;

    Ok(())
}
