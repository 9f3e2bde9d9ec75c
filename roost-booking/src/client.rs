use crate::{
    BookingHistory, BookingSheet, BookingSubmitter, PropertyList, SheetListener, SheetSettings,
};
use roost_calendar::CalendarTheme;
use roost_core::format::format_location;
use roost_shared::Property;
use roost_store::app_config::BookingConfig;
use roost_store::{Config, RestClient, StoreError};
use std::sync::Arc;
use tracing::debug;

/// Wires the screens of the app to one REST backend and the `booking` and
/// `calendar` settings.
pub struct BookingClient {
    rest: Arc<RestClient>,
    booking: BookingConfig,
    theme: CalendarTheme,
}

impl BookingClient {
    pub fn new(rest: RestClient, booking: BookingConfig, theme: CalendarTheme) -> Self {
        Self {
            rest: Arc::new(rest),
            booking,
            theme,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let rest = RestClient::new(&config.api)?;
        debug!(base_url = %config.api.base_url, "booking client ready");
        Ok(Self::new(rest, config.booking.clone(), config.calendar.clone()))
    }

    pub fn sheet_settings(&self) -> SheetSettings {
        SheetSettings::from_config(&self.booking, &self.theme)
    }

    /// The location shown in the sheet header: the property's own address,
    /// or the configured default when it has none.
    pub fn location_label(&self, property: &Property) -> String {
        format_location(property.location.as_ref())
            .unwrap_or_else(|| self.booking.default_location.clone())
    }

    /// A booking sheet for `property`, already open.
    pub fn sheet_for(&self, property: &Property, listener: Arc<dyn SheetListener>) -> BookingSheet {
        let sheet = BookingSheet::new(
            BookingSubmitter::new(self.rest.clone()),
            listener,
            property.id.clone(),
            self.location_label(property),
            self.sheet_settings(),
        );
        sheet.open();
        sheet
    }

    pub fn history(&self) -> BookingHistory {
        BookingHistory::new(self.rest.clone(), self.booking.currency.clone())
    }

    pub fn property_list(&self) -> PropertyList {
        PropertyList::new(self.rest.clone())
    }
}
