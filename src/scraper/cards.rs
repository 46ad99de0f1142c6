// src/scraper/cards.rs
use crate::domain::address::title_case;
use crate::domain::listing::{Listing, UNKNOWN_ADDRESS, UNKNOWN_PRICE};
use crate::scraper::ScraperError;
use scraper::{ElementRef, Html, Selector};
use std::borrow::Cow;
use url::Url;

const CARD_SELECTOR: &str = "li.search-results-listings-list__item";
const LINK_SELECTOR: &str = "a[href]";
const PRICE_SELECTOR: &str = ".search-results-listings-list__item-description__price";

/// Only sale listings are kept (French or English URLs).
const FOR_SALE_MARKERS: &[&str] = &["a-vendre", "for-sale"];

/// Slug prefixes for houses ("hab") and plexes/lots ("prop").
const LISTING_TYPE_MARKERS: &[&str] = &["hab", "prop"];

pub struct CardSelectors {
    card: Selector,
    link: Selector,
    price: Selector,
}

impl CardSelectors {
    pub fn new() -> Result<Self, ScraperError> {
        let parse =
            |css: &str| Selector::parse(css).map_err(|e| ScraperError::HtmlParse(e.to_string()));

        Ok(Self {
            card: parse(CARD_SELECTOR)?,
            link: parse(LINK_SELECTOR)?,
            price: parse(PRICE_SELECTOR)?,
        })
    }

    pub fn cards<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        document.select(&self.card)
    }

    /// Reads one card. `Ok(None)` means the card isn't a sale listing.
    pub fn parse_card(&self, card: ElementRef, origin: &Url) -> Result<Option<Listing>, ScraperError> {
        let Some(anchor) = card.select(&self.link).next() else {
            return Ok(None);
        };
        let href = anchor.value().attr("href").unwrap_or_default().trim();

        let link = origin
            .join(href)
            .map_err(|e| ScraperError::Card(format!("unusable href {href:?}: {e}")))?;

        let link_str = link.as_str();
        if !FOR_SALE_MARKERS.iter().any(|m| link_str.contains(m)) {
            return Ok(None);
        }

        let price_text = self.price_text(card);
        let address = address_from_link(&link).unwrap_or_else(|| {
            tracing::debug!(link = %link, "no address in link slug");
            UNKNOWN_ADDRESS.to_string()
        });

        Ok(Some(Listing {
            address,
            price_text,
            link: link.into(),
        }))
    }

    /// The dedicated price element wins; otherwise the first loose text with a `$`.
    fn price_text(&self, card: ElementRef) -> String {
        let raw = match card.select(&self.price).next() {
            Some(el) => el.text().map(str::trim).collect::<String>(),
            None => card
                .text()
                .map(str::trim)
                .find(|s| !s.is_empty() && s.contains('$'))
                .map(str::to_string)
                .unwrap_or_else(|| UNKNOWN_PRICE.to_string()),
        };

        raw.replace('\u{a0}', " ")
    }
}

/// Builds an address out of the last path segment of a listing URL:
/// `hab-5-3239-rue-something-1083456` -> `5 3239 Rue Something`.
/// Accented slugs come back percent-encoded from the URL and are decoded first.
pub fn address_from_link(link: &Url) -> Option<String> {
    let raw = link.path_segments()?.rev().find(|s| !s.is_empty())?;
    let slug = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
    let parts: Vec<&str> = slug.split('-').collect();

    let end = parts.len().saturating_sub(1);
    let start = if LISTING_TYPE_MARKERS.contains(&parts[0]) { 1 } else { 0 };
    let words = parts.get(start..end).unwrap_or_default();

    let address = title_case(&words.join(" "));
    let address = address.trim();
    (!address.is_empty()).then(|| address.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://duproprio.com").unwrap()
    }

    fn first_card(html: &str) -> Result<Option<Listing>, ScraperError> {
        let selectors = CardSelectors::new().unwrap();
        let doc = Html::parse_document(html);
        let card = selectors.cards(&doc).next().expect("fixture has a card");
        selectors.parse_card(card, &origin())
    }

    #[test]
    fn address_drops_type_marker_and_listing_id() {
        let link = Url::parse(
            "https://duproprio.com/fr/montreal/condo-a-vendre/hab-5-3239-rue-something-1083456",
        )
        .unwrap();
        assert_eq!(address_from_link(&link).as_deref(), Some("5 3239 Rue Something"));
    }

    #[test]
    fn address_without_type_marker_only_drops_id() {
        let link =
            Url::parse("https://duproprio.com/en/montreal/house-for-sale/4500-avenue-walkley-998877")
                .unwrap();
        assert_eq!(address_from_link(&link).as_deref(), Some("4500 Avenue Walkley"));
    }

    #[test]
    fn address_ignores_trailing_slash() {
        let link = Url::parse("https://duproprio.com/fr/a-vendre/prop-1200-rue-x-42/").unwrap();
        assert_eq!(address_from_link(&link).as_deref(), Some("1200 Rue X"));
    }

    #[test]
    fn accented_slug_is_decoded_before_title_casing() {
        let html = r#"<ul><li class="search-results-listings-list__item">
            <a href="/fr/montreal/maison-a-vendre/hab-4500-chemin-côte-saint-luc-123">Voir</a>
        </li></ul>"#;

        let listing = first_card(html).unwrap().unwrap();
        assert_eq!(listing.address, "4500 Chemin Côte Saint Luc");
        assert!(listing.link.ends_with("hab-4500-chemin-c%C3%B4te-saint-luc-123"));
    }

    #[test]
    fn address_missing_when_slug_is_only_an_id() {
        let link = Url::parse("https://duproprio.com/fr/a-vendre/hab-42").unwrap();
        assert_eq!(address_from_link(&link), None);
    }

    #[test]
    fn relative_link_gets_site_origin_and_price_element_is_used() {
        let html = r#"<ul><li class="search-results-listings-list__item">
            <a href="/fr/montreal/maison-a-vendre/hab-4500-rue-x-123">Voir</a>
            <div class="search-results-listings-list__item-description__price">
                <span>450&nbsp;000&nbsp;$</span>
            </div>
        </li></ul>"#;

        let listing = first_card(html).unwrap().unwrap();
        assert_eq!(
            listing.link,
            "https://duproprio.com/fr/montreal/maison-a-vendre/hab-4500-rue-x-123"
        );
        assert_eq!(listing.price_text, "450 000 $");
        assert_eq!(listing.address, "4500 Rue X");
    }

    #[test]
    fn loose_dollar_text_is_the_fallback_price() {
        let html = r#"<ul><li class="search-results-listings-list__item">
            <a href="https://duproprio.com/en/montreal/condo-for-sale/hab-77-street-y-9">Go</a>
            <p>2 bedrooms</p><p>$450,000</p><p>$1 tax</p>
        </li></ul>"#;

        let listing = first_card(html).unwrap().unwrap();
        assert_eq!(listing.price_text, "$450,000");
    }

    #[test]
    fn price_defaults_to_sentinel() {
        let html = r#"<ul><li class="search-results-listings-list__item">
            <a href="/fr/a-vendre/hab-77-rue-y-9">Go</a><p>Bientot</p>
        </li></ul>"#;

        let listing = first_card(html).unwrap().unwrap();
        assert_eq!(listing.price_text, UNKNOWN_PRICE);
    }

    #[test]
    fn non_sale_links_and_linkless_cards_are_ignored() {
        let rental = r#"<ul><li class="search-results-listings-list__item">
            <a href="/fr/a-louer/hab-77-rue-y-9">Go</a></li></ul>"#;
        assert_eq!(first_card(rental).unwrap(), None);

        let bare = r#"<ul><li class="search-results-listings-list__item"><p>Ad</p></li></ul>"#;
        assert_eq!(first_card(bare).unwrap(), None);
    }
}
