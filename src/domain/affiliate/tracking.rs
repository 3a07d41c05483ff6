//! Affiliate tracking-parameter injection.

use url::Url;

use super::{AffiliateError, AffiliateIds, Partner};

/// Adds the partner's affiliate parameter (when we have an id for it) and
/// `utm_source` to `base_url`.
///
/// Parameters are *set*: an existing occurrence is replaced in place and
/// any further duplicates are dropped.
pub fn apply_affiliate_tracking(
    partner: Partner,
    base_url: &str,
    ids: &AffiliateIds,
    utm_source: &str,
) -> Result<String, AffiliateError> {
    let mut url = Url::parse(base_url).map_err(|e| AffiliateError::invalid_url(base_url, e))?;

    if let Some(id) = ids.for_partner(partner) {
        set_query_param(&mut url, partner.tracking_param(), id);
    }
    set_query_param(&mut url, "utm_source", utm_source);

    Ok(url.to_string())
}

fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (k, v) in url.query_pairs() {
        if k == key {
            if !replaced {
                pairs.push((k.into_owned(), value.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    if !replaced {
        pairs.push((key.to_string(), value.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> AffiliateIds {
        AffiliateIds {
            instacart: Some("ic-123".to_string()),
            walmart: Some("wm-456".to_string()),
            amazon: Some("swift-20".to_string()),
        }
    }

    #[test]
    fn instacart_gets_aff_id_and_utm_source() {
        let url = apply_affiliate_tracking(
            Partner::Instacart,
            "https://www.instacart.com/store",
            &ids(),
            "swifteatz",
        )
        .unwrap();
        assert_eq!(url, "https://www.instacart.com/store?aff_id=ic-123&utm_source=swifteatz");
    }

    #[test]
    fn amazon_uses_tag_param() {
        let url = apply_affiliate_tracking(
            Partner::Amazon,
            "https://www.amazon.com/fresh?ref=nav",
            &ids(),
            "swifteatz",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://www.amazon.com/fresh?ref=nav&tag=swift-20&utm_source=swifteatz"
        );
    }

    #[test]
    fn only_the_requested_partner_param_is_added() {
        let url =
            apply_affiliate_tracking(Partner::Walmart, "https://walmart.com/", &ids(), "swifteatz")
                .unwrap();
        assert!(url.contains("affp1=wm-456"));
        assert!(!url.contains("aff_id"));
        assert!(!url.contains("tag="));
    }

    #[test]
    fn missing_id_still_adds_utm_source() {
        let url = apply_affiliate_tracking(
            Partner::Walmart,
            "https://walmart.com/cart",
            &AffiliateIds::default(),
            "swifteatz",
        )
        .unwrap();
        assert_eq!(url, "https://walmart.com/cart?utm_source=swifteatz");
    }

    #[test]
    fn existing_params_are_replaced_in_place() {
        let url = apply_affiliate_tracking(
            Partner::Amazon,
            "https://amazon.com/s?tag=other&k=milk&tag=dup&utm_source=x",
            &ids(),
            "swifteatz",
        )
        .unwrap();
        assert_eq!(url, "https://amazon.com/s?tag=swift-20&k=milk&utm_source=swifteatz");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = apply_affiliate_tracking(Partner::Amazon, "not a url", &ids(), "swifteatz");
        assert!(matches!(result, Err(AffiliateError::InvalidUrl { .. })));
    }
}
