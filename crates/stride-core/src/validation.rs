//! # Validation Module
//!
//! Input validation for the Stride storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Type validation (a quantity is an integer or the request fails)   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE — business rule validation                       │
//! │  └── Formats, lengths, ranges; accumulated into reports                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL, UNIQUE (email), foreign keys                            │
//! │                                                                         │
//! │  Defense in depth: each layer catches different errors                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Record validators return a [`ValidationReport`] carrying every failing
//! check's message in check order; predicates return plain bools.

use crate::cart::CartItem;
use crate::error::{ValidationError, ValidationReport};
use crate::money::Money;
use crate::types::{NewOrderLine, ShippingDetails};
use crate::{MAX_SHOE_SIZE, MIN_SHOE_SIZE};

/// Result type for single-rule validators.
pub type ValidationResult = Result<(), ValidationError>;

// =============================================================================
// Account Validators
// =============================================================================

/// Validates an email address.
///
/// ## Rules
/// The trimmed value must be `local@domain` where neither side is empty or
/// contains whitespace or a second `@`, and the domain contains an interior
/// dot ("a@b.c" is valid, "a@.c" and "a@b." are not).
///
/// ## Example
/// ```rust
/// use stride_core::validation::is_valid_email;
///
/// assert!(is_valid_email("ana@example.com"));
/// assert!(!is_valid_email("ana@example"));
/// assert!(!is_valid_email(""));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs a dot with at least one character on each side.
    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, &c)| c == '.' && i > 0 && i < chars.len() - 1)
}

/// Validates a password.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 6 and 100 characters
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "Password".to_string(),
        });
    }

    if password.chars().count() < 6 {
        return Err(ValidationError::TooShort {
            field: "Password".to_string(),
            min: 6,
        });
    }

    if password.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "Password".to_string(),
        });
    }

    Ok(())
}

/// A registration form as submitted by a new customer.
#[derive(Debug, Clone)]
pub struct RegistrationDetails {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Validates a registration form, reporting every failing check.
///
/// ## Checks (in report order)
/// 1. Email format
/// 2. Password rules
/// 3. First name trimmed length >= 2
/// 4. Last name trimmed length >= 2
///
/// ## Example
/// ```rust
/// use stride_core::validation::{validate_user_registration, RegistrationDetails};
///
/// let form = RegistrationDetails {
///     email: "not-an-email".to_string(),
///     password: "abc".to_string(),
///     first_name: "A".to_string(),
///     last_name: "Novak".to_string(),
/// };
/// let report = validate_user_registration(&form);
/// assert!(!report.is_valid());
/// assert_eq!(report.errors().len(), 3);
/// ```
pub fn validate_user_registration(form: &RegistrationDetails) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !is_valid_email(&form.email) {
        report.push_error(ValidationError::InvalidFormat {
            field: "email".to_string(),
        });
    }

    if let Err(err) = validate_password(&form.password) {
        report.push_error(err);
    }

    if form.first_name.trim().chars().count() < 2 {
        report.push_error(ValidationError::TooShort {
            field: "First name".to_string(),
            min: 2,
        });
    }

    if form.last_name.trim().chars().count() < 2 {
        report.push_error(ValidationError::TooShort {
            field: "Last name".to_string(),
            min: 2,
        });
    }

    report
}

// =============================================================================
// Order Validators
// =============================================================================

/// Validates an order request before the transaction runs.
///
/// ## Checks (in report order)
/// 1. At least one line item
/// 2. Shipping address trimmed length >= 5
/// 3. Shipping city trimmed length >= 2
/// 4. Postal code is exactly 4 digits
pub fn validate_order_data(items: &[NewOrderLine], shipping: &ShippingDetails) -> ValidationReport {
    let mut report = ValidationReport::new();

    if items.is_empty() {
        report.push("Order must contain at least one item");
    }

    if shipping.address.trim().chars().count() < 5 {
        report.push("Valid shipping address is required");
    }

    if shipping.city.trim().chars().count() < 2 {
        report.push("Valid shipping city is required");
    }

    if !is_valid_postal_code(&shipping.postal_code) {
        report.push("Valid postal code is required (4 digits)");
    }

    report
}

/// Validates a Slovenian postal code: exactly 4 digits after trimming.
pub fn is_valid_postal_code(postal_code: &str) -> bool {
    let trimmed = postal_code.trim();
    trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates an entity id: must be positive.
pub fn is_valid_id(id: i64) -> bool {
    id > 0
}

/// Validates a shoe size: any value in the EU range [35, 50].
///
/// This is the storage-side rule. The stricter display-side rule that also
/// requires whole or half sizes is [`is_valid_shoe_size_strict`]; the two
/// deliberately coexist because different call sites enforce different rules.
pub fn is_valid_shoe_size(size: f64) -> bool {
    !size.is_nan() && (MIN_SHOE_SIZE..=MAX_SHOE_SIZE).contains(&size)
}

/// Validates a shoe size for selection UIs: in range AND a whole or half step.
///
/// ## Example
/// ```rust
/// use stride_core::validation::{is_valid_shoe_size, is_valid_shoe_size_strict};
///
/// assert!(is_valid_shoe_size_strict(42.5));
/// assert!(!is_valid_shoe_size_strict(42.3));
/// assert!(is_valid_shoe_size(42.3)); // the loose rule accepts it
/// ```
pub fn is_valid_shoe_size_strict(size: f64) -> bool {
    is_valid_shoe_size(size) && (size * 2.0).fract() == 0.0
}

/// Validates a line quantity: integer in [1, max_stock].
///
/// Callers without a concrete stock figure pass [`crate::MAX_ITEM_QUANTITY`].
pub fn is_valid_quantity(quantity: i64, max_stock: i64) -> bool {
    quantity >= 1 && quantity <= max_stock
}

/// Validates a product draft (name + price), reporting every failing check.
///
/// ## Example
/// ```rust
/// use stride_core::validation::validate_product;
/// use stride_core::Money;
///
/// assert!(validate_product("Air Jordan 1", Money::from_cents(19_999)).is_valid());
/// assert!(!validate_product("X", Money::from_cents(19_999)).is_valid());
/// assert!(!validate_product("Air Jordan 1", Money::from_cents(-1)).is_valid());
/// ```
pub fn validate_product(name: &str, price: Money) -> ValidationReport {
    let mut report = ValidationReport::new();

    if name.trim().chars().count() < 2 {
        report.push_error(ValidationError::TooShort {
            field: "Name".to_string(),
            min: 2,
        });
    }

    if price.is_negative() {
        report.push_error(ValidationError::MustBePositive {
            field: "Price".to_string(),
        });
    }

    report
}

// =============================================================================
// Cart & Stock Validators
// =============================================================================

/// Strict shape check for a cart line.
///
/// Accepts exactly the shape produced by [`crate::Cart::add_item`]: positive
/// product id, non-empty name, non-negative price, non-empty size, positive
/// quantity. Field types are guaranteed by the struct itself.
pub fn is_valid_cart_item(item: &CartItem) -> bool {
    item.product_id > 0
        && !item.name.is_empty()
        && !item.price.is_negative()
        && !item.size.is_empty()
        && item.quantity > 0
}

/// Checks whether a requested quantity can be served from available stock.
///
/// ## Example
/// ```rust
/// use stride_core::validation::is_stock_available;
///
/// assert!(is_stock_available(2, 5));
/// assert!(!is_stock_available(10, 5));
/// assert!(!is_stock_available(-1, 5));
/// ```
pub fn is_stock_available(requested: i64, available: i64) -> bool {
    requested > 0 && available >= requested
}

// =============================================================================
// Input Hygiene
// =============================================================================

/// Trims whitespace and strips the literal characters `<`, `>`, `'`, `"`.
///
/// This is display hygiene, not a security boundary: queries stay
/// parameterized regardless of what passes through here.
pub fn sanitize_input(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"'))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_ITEM_QUANTITY;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("  ana@example.com  ")); // trimmed
        assert!(is_valid_email("a.b+c@mail.example.si"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("ana@example."));
        assert!(!is_valid_email("an a@example.com"));
        assert!(!is_valid_email("ana@@example.com"));
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("demo123").is_ok());

        assert_eq!(
            validate_password("").unwrap_err().to_string(),
            "Password is required"
        );
        assert_eq!(
            validate_password("abc").unwrap_err().to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            validate_password(&"a".repeat(101)).unwrap_err().to_string(),
            "Password is too long"
        );
    }

    #[test]
    fn test_validate_user_registration_accumulates_all_errors() {
        let form = RegistrationDetails {
            email: "bad".to_string(),
            password: "ab".to_string(),
            first_name: " a ".to_string(),
            last_name: "".to_string(),
        };

        let report = validate_user_registration(&form);
        assert!(!report.is_valid());
        assert_eq!(
            report.errors(),
            &[
                "Invalid email format",
                "Password must be at least 6 characters",
                "First name must be at least 2 characters",
                "Last name must be at least 2 characters",
            ]
        );
    }

    #[test]
    fn test_validate_user_registration_valid() {
        let form = RegistrationDetails {
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Novak".to_string(),
        };
        assert!(validate_user_registration(&form).is_valid());
    }

    fn shipping(address: &str, city: &str, postal: &str) -> ShippingDetails {
        ShippingDetails {
            address: address.to_string(),
            city: city.to_string(),
            postal_code: postal.to_string(),
        }
    }

    fn line(product_id: i64) -> NewOrderLine {
        NewOrderLine {
            product_id,
            size: "42".to_string(),
            quantity: 1,
        }
    }

    #[test]
    fn test_validate_order_data() {
        let ok = validate_order_data(&[line(1)], &shipping("Glavna ulica 1", "Maribor", "2000"));
        assert!(ok.is_valid());

        let empty = validate_order_data(&[], &shipping("Glavna ulica 1", "Maribor", "2000"));
        assert_eq!(empty.errors(), &["Order must contain at least one item"]);

        let bad = validate_order_data(&[], &shipping("abc", "M", "12345"));
        assert_eq!(
            bad.errors(),
            &[
                "Order must contain at least one item",
                "Valid shipping address is required",
                "Valid shipping city is required",
                "Valid postal code is required (4 digits)",
            ]
        );
    }

    #[test]
    fn test_is_valid_postal_code() {
        assert!(is_valid_postal_code("2000"));
        assert!(is_valid_postal_code(" 1000 "));
        assert!(!is_valid_postal_code("200"));
        assert!(!is_valid_postal_code("20000"));
        assert!(!is_valid_postal_code("20a0"));
    }

    #[test]
    fn test_is_valid_id() {
        assert!(is_valid_id(1));
        assert!(is_valid_id(123_456));
        assert!(!is_valid_id(0));
        assert!(!is_valid_id(-5));
    }

    #[test]
    fn test_shoe_size_range() {
        assert!(is_valid_shoe_size(35.0));
        assert!(is_valid_shoe_size(42.5));
        assert!(is_valid_shoe_size(50.0));
        assert!(!is_valid_shoe_size(34.9));
        assert!(!is_valid_shoe_size(50.5));
        assert!(!is_valid_shoe_size(f64::NAN));
    }

    #[test]
    fn test_shoe_size_strict_requires_half_steps() {
        assert!(is_valid_shoe_size_strict(42.0));
        assert!(is_valid_shoe_size_strict(42.5));
        assert!(!is_valid_shoe_size_strict(42.3));
        assert!(!is_valid_shoe_size_strict(51.0));
    }

    #[test]
    fn test_is_valid_quantity() {
        assert!(is_valid_quantity(1, MAX_ITEM_QUANTITY));
        assert!(is_valid_quantity(99, MAX_ITEM_QUANTITY));
        assert!(!is_valid_quantity(0, MAX_ITEM_QUANTITY));
        assert!(!is_valid_quantity(100, MAX_ITEM_QUANTITY));

        // Bounded by concrete stock when known
        assert!(is_valid_quantity(3, 3));
        assert!(!is_valid_quantity(4, 3));
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product("Air Jordan 1", Money::from_cents(19_999)).is_valid());

        let short = validate_product("X", Money::from_cents(100));
        assert_eq!(short.errors(), &["Name must be at least 2 characters"]);

        let negative = validate_product("Air Jordan 1", Money::from_cents(-100));
        assert_eq!(negative.errors(), &["Price must be a positive number"]);

        let both = validate_product(" ", Money::from_cents(-1));
        assert_eq!(both.errors().len(), 2);
    }

    #[test]
    fn test_is_stock_available() {
        assert!(is_stock_available(2, 5));
        assert!(is_stock_available(5, 5));
        assert!(!is_stock_available(10, 5));
        assert!(!is_stock_available(0, 5));
        assert!(!is_stock_available(-1, 5));
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(
            sanitize_input("<script>alert(\"xss\")</script>"),
            "scriptalert(xss)/script"
        );
        assert_eq!(sanitize_input("  Glavna ulica 1  "), "Glavna ulica 1");
        assert_eq!(sanitize_input("O'Brien"), "OBrien");
        assert_eq!(sanitize_input(""), "");
    }
}
