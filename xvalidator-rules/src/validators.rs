// Built-in validators

use crate::{PasswordPolicy, ValidationError, check_password_strength, messages};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use xvalidator_decimal::{
    CompareOp, DecimalLimit, DecimalValue, FieldAccess, check_comparison, check_decimal_if,
    check_precision_scale,
};

/// E.164 international phone number, used as a cheap pre-check before the
/// full metadata lookup.
pub static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]?[0-9]{7,14}$").unwrap());

/// URL with the `https` scheme and a non-empty host.
pub fn is_https_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.scheme() == "https" && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Valid mobile (or fixed-line-or-mobile) number in E.164 form.
///
/// A non-empty `region` (ISO 3166 alpha-2, e.g. `"TH"`) must match the
/// region the number belongs to, as resolved by [`region_for_number`].
#[cfg(feature = "phone")]
pub fn is_mobile_e164(value: &str, region: &str) -> bool {
    use phonenumber::Type;

    if !E164_REGEX.is_match(value) {
        return false;
    }

    let Ok(number) = phonenumber::parse(None, value) else {
        return false;
    };
    if !phonenumber::is_valid(&number) {
        return false;
    }

    match number.number_type(&phonenumber::metadata::DATABASE) {
        Type::Mobile | Type::FixedLineOrMobile => {}
        _ => return false,
    }

    if region.is_empty() {
        return true;
    }

    region_for_number(&number).is_some_and(|id| {
        let id: &str = id.as_ref();
        id == region
    })
}

/// Region a parsed number belongs to.
///
/// Every region sharing the calling code is tried in metadata order, main
/// region first. A region with leading digits claims the number when they
/// prefix the national number; otherwise it claims it when the number fits
/// one of its number types. Non-geographic codes resolve to `None`.
#[cfg(feature = "phone")]
pub fn region_for_number(number: &phonenumber::PhoneNumber) -> Option<phonenumber::country::Id> {
    use phonenumber::metadata::DATABASE;

    let regions = DATABASE.by_code(&number.code().value())?;
    let national = number.national().to_string();

    let claimed = if regions.len() == 1 {
        regions[0]
    } else {
        regions
            .iter()
            .copied()
            .find(|meta| match meta.leading_digits() {
                Some(pattern) => pattern.find(&national).is_some_and(|m| m.start() == 0),
                None => has_number_type(meta, &national),
            })?
    };

    claimed.id().parse().ok()
}

#[cfg(feature = "phone")]
fn has_number_type(meta: &phonenumber::Metadata, national: &str) -> bool {
    use phonenumber::Type;

    const TYPES: [Type; 10] = [
        Type::PremiumRate,
        Type::TollFree,
        Type::SharedCost,
        Type::Voip,
        Type::PersonalNumber,
        Type::Pager,
        Type::Uan,
        Type::Voicemail,
        Type::FixedLine,
        Type::Mobile,
    ];

    let descriptors = meta.descriptors();
    descriptors.general().is_match(national)
        && TYPES.iter().any(|kind| {
            descriptors
                .get(*kind)
                .is_some_and(|descriptor| descriptor.is_match(national))
        })
}

/// Validates that a value is not blank
pub struct Required;

impl Required {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::new(field, messages::required(field)).with_constraint("required"))
        } else {
            Ok(())
        }
    }
}

/// Validates decimal precision and scale
pub struct IsDecimal(pub DecimalLimit);

impl IsDecimal {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        let passed = DecimalValue::parse(value)
            .and_then(|parsed| check_precision_scale(&parsed, self.0))
            .is_ok();
        if passed {
            return Ok(());
        }

        let param = format!("{}:{}", self.0.precision, self.0.scale);
        Err(ValidationError::new(field, messages::decimal(field, &param))
            .with_constraint("decimal")
            .with_param(param)
            .with_value(value.to_string()))
    }
}

/// Validates a decimal against an operand, e.g. `DecimalCompare(CompareOp::Gt, "100")`
pub struct DecimalCompare<'a>(pub CompareOp, pub &'a str);

impl DecimalCompare<'_> {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        let DecimalCompare(op, operand) = *self;
        check_comparison(op, value, operand).map_err(|_| {
            ValidationError::new(field, messages::comparison(field, op, operand))
                .with_constraint(op.rule_name())
                .with_param(operand)
                .with_value(value.to_string())
        })
    }
}

/// Validates a decimal only when a sibling field holds an expected value.
///
/// The parameter uses the `decimal_if` syntax, e.g. `"10:2@Mode=credit"`.
pub struct DecimalIf<'a>(pub &'a str);

impl DecimalIf<'_> {
    pub fn validate(
        &self,
        value: &str,
        field: &str,
        parent: &dyn FieldAccess,
    ) -> Result<(), ValidationError> {
        match check_decimal_if(value, self.0, parent) {
            Ok(_) => Ok(()),
            Err(_) => Err(
                ValidationError::new(field, messages::decimal_if(field, self.0, parent))
                    .with_constraint("decimal_if")
                    .with_param(self.0)
                    .with_value(value.to_string()),
            ),
        }
    }
}

/// Validates an HTTPS URL
pub struct IsHttpsUrl;

impl IsHttpsUrl {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if is_https_url(value) {
            Ok(())
        } else {
            Err(ValidationError::new(field, messages::https_url(field))
                .with_constraint("https_url")
                .with_value(value.to_string()))
        }
    }
}

/// Validates a mobile number in E.164 form, optionally for one region
#[cfg(feature = "phone")]
pub struct IsMobileE164<'a>(pub &'a str);

#[cfg(feature = "phone")]
impl IsMobileE164<'_> {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if is_mobile_e164(value, self.0) {
            Ok(())
        } else {
            Err(ValidationError::new(field, messages::mobile_e164(field))
                .with_constraint("mobile_e164")
                .with_param(self.0)
                .with_value(value.to_string()))
        }
    }
}

/// Validates password strength against a policy
pub struct StrongPassword<'a>(pub &'a PasswordPolicy);

impl StrongPassword<'_> {
    /// The failing value is not recorded on the error.
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        check_password_strength(value, self.0).map_err(|_| {
            ValidationError::new(field, messages::password_strength(field, self.0))
                .with_constraint("password_strength")
        })
    }
}
