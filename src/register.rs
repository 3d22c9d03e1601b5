//! Register facade: one value owning the catalog, the cart, and the
//! operator session
//!
//! The interactive shell and the CLI subcommands only talk to this
//! type. Admin gating for catalog mutation and listing lives here, in
//! front of any state change.

use crate::cart::{self, Cart, CartLine};
use crate::catalog::{CatalogStore, Suggestions};
use crate::checkout::{self, Receipt};
use crate::error::TillResult;
use crate::session::{Role, Session};
use std::path::PathBuf;

pub struct Register {
    catalog: CatalogStore,
    cart: Cart,
    session: Session,
}

impl Register {
    /// Open a register against the given catalog data file.
    pub fn open(data_file: PathBuf) -> Self {
        Self {
            catalog: CatalogStore::load(data_file),
            cart: Cart::new(),
            session: Session::new(),
        }
    }

    // ---- Session ----

    pub fn login(&mut self, username: &str, password: &str) -> TillResult<()> {
        self.session.login(username, password)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn role(&self) -> Role {
        self.session.role()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    // ---- Browsing ----

    pub fn suggest(&self, query: &str) -> Suggestions {
        self.catalog.suggest(query)
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    // ---- Cart ----

    /// Validate quantity text and add the item to the cart. The unit
    /// price is snapshotted from the catalog at this moment; unknown
    /// names go in at price 0. Returns the parsed quantity.
    pub fn add_to_cart(&mut self, name: &str, qty_text: &str) -> TillResult<u64> {
        let quantity = cart::parse_quantity(qty_text)?;
        let unit_price = self.catalog.price_or_zero(name);
        self.cart.add_item(name, quantity, unit_price)?;
        Ok(quantity)
    }

    pub fn remove_last(&mut self) -> TillResult<CartLine> {
        self.cart.remove_last()
    }

    pub fn new_transaction(&mut self) {
        self.cart.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    // ---- Checkout ----

    /// Take payment against the current total. Leaves the cart intact
    /// whether or not the tender is accepted.
    pub fn checkout(&self, cash_text: &str) -> TillResult<Receipt> {
        checkout::tender(self.cart.total(), cash_text)
    }

    // ---- Catalog maintenance (admin) ----

    pub fn upsert_item(&mut self, name: &str, price_text: &str) -> TillResult<(String, u64)> {
        self.session.require_admin()?;
        self.catalog.upsert(name, price_text)
    }

    /// Full catalog, name-ascending.
    pub fn price_list(&self) -> TillResult<Vec<(String, u64)>> {
        self.session.require_admin()?;
        Ok(self
            .catalog
            .entries()
            .map(|(name, price)| (name.to_string(), price))
            .collect())
    }
}
