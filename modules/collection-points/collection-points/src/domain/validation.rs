//! Request validation for the registration form and the listing filter.
//!
//! Every field is checked and all violations are reported together; nothing
//! here touches storage.

use collection_points_sdk::{NewPoint, PointFilter, parse_item_ids};

use crate::domain::error::{DomainError, FieldViolation};

/// Raw text fields of the registration form, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub number: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub city: Option<String>,
    pub uf: Option<String>,
    pub items: Option<String>,
}

impl PointForm {
    /// Store `value` under the form field `field`. Returns `false` for
    /// fields the form does not know.
    pub fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "whatsapp" => &mut self.whatsapp,
            "number" => &mut self.number,
            "latitude" => &mut self.latitude,
            // older web clients send the misspelled name
            "longitude" | "longetude" => &mut self.longitude,
            "city" => &mut self.city,
            "uf" => &mut self.uf,
            "items" => &mut self.items,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// A validated form still waiting for its stored image name.
#[derive(Debug, Clone, PartialEq)]
pub struct PointDraft {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub number: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub items: Vec<i32>,
}

impl PointDraft {
    #[must_use]
    pub fn with_image(self, image: String) -> NewPoint {
        NewPoint {
            name: self.name,
            email: self.email,
            whatsapp: self.whatsapp,
            image,
            latitude: self.latitude,
            longitude: self.longitude,
            city: self.city,
            uf: self.uf,
            number: self.number,
            items: self.items,
        }
    }
}

/// Validate the registration form. `image` is the uploaded file part, if
/// one was sent; it is handed back untouched on success.
///
/// # Errors
/// [`DomainError::Validation`] listing every invalid or missing field.
pub fn validate_point_form<T>(
    form: &PointForm,
    image: Option<T>,
) -> Result<(PointDraft, T), DomainError> {
    let mut check = Checker::default();

    let name = check.text("name", form.name.as_deref());
    let email = check.email("email", form.email.as_deref());
    let whatsapp = check.phone("whatsapp", form.whatsapp.as_deref());
    let number = check.integer("number", form.number.as_deref());
    let latitude = check.coordinate("latitude", form.latitude.as_deref());
    let longitude = check.coordinate("longitude", form.longitude.as_deref());
    let city = check.text("city", form.city.as_deref());
    let uf = check.state_code("uf", form.uf.as_deref());
    let items = check.item_ids("items", form.items.as_deref());
    if image.is_none() {
        check.reject("image", "an image file is required");
    }

    match (
        name, email, whatsapp, number, latitude, longitude, city, uf, items, image,
    ) {
        (
            Some(name),
            Some(email),
            Some(whatsapp),
            Some(number),
            Some(latitude),
            Some(longitude),
            Some(city),
            Some(uf),
            Some(items),
            Some(image),
        ) => Ok((
            PointDraft {
                name,
                email,
                whatsapp,
                number,
                latitude,
                longitude,
                city,
                uf,
                items,
            },
            image,
        )),
        _ => Err(check.into_error()),
    }
}

/// Validate the listing query. All three parameters are required.
///
/// # Errors
/// [`DomainError::Validation`] listing every invalid or missing parameter.
pub fn validate_filter(
    uf: Option<&str>,
    city: Option<&str>,
    items: Option<&str>,
) -> Result<PointFilter, DomainError> {
    let mut check = Checker::default();

    let uf = check.state_code("uf", uf);
    let city = check.text("city", city);
    let items = check.item_ids("items", items);

    match (uf, city, items) {
        (Some(uf), Some(city), Some(items)) => Ok(PointFilter { uf, city, items }),
        _ => Err(check.into_error()),
    }
}

#[derive(Default)]
struct Checker {
    violations: Vec<FieldViolation>,
}

impl Checker {
    fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    fn into_error(self) -> DomainError {
        DomainError::Validation(self.violations)
    }

    fn required<'a>(&mut self, field: &'static str, value: Option<&'a str>) -> Option<&'a str> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.reject(field, "is required");
                None
            }
        }
    }

    fn text(&mut self, field: &'static str, value: Option<&str>) -> Option<String> {
        self.required(field, value).map(str::to_owned)
    }

    fn email(&mut self, field: &'static str, value: Option<&str>) -> Option<String> {
        let v = self.required(field, value)?;
        if looks_like_email(v) {
            Some(v.to_owned())
        } else {
            self.reject(field, "must be a valid email address");
            None
        }
    }

    fn phone(&mut self, field: &'static str, value: Option<&str>) -> Option<String> {
        let v = self.required(field, value)?;
        let digits = v.strip_prefix('+').unwrap_or(v);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            Some(v.to_owned())
        } else {
            self.reject(field, "must contain digits only");
            None
        }
    }

    fn integer(&mut self, field: &'static str, value: Option<&str>) -> Option<i32> {
        let v = self.required(field, value)?;
        if let Ok(n) = v.parse::<i32>() {
            Some(n)
        } else {
            self.reject(field, "must be an integer");
            None
        }
    }

    fn coordinate(&mut self, field: &'static str, value: Option<&str>) -> Option<f64> {
        let v = self.required(field, value)?;
        match v.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(n),
            _ => {
                self.reject(field, "must be a number");
                None
            }
        }
    }

    fn state_code(&mut self, field: &'static str, value: Option<&str>) -> Option<String> {
        let v = self.required(field, value)?;
        if v.len() == 2 && v.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(v.to_owned())
        } else {
            self.reject(field, "must be a two-letter state code");
            None
        }
    }

    fn item_ids(&mut self, field: &'static str, value: Option<&str>) -> Option<Vec<i32>> {
        let v = self.required(field, value)?;
        match parse_item_ids(v) {
            Ok(ids) => Some(ids),
            Err(e) => {
                self.reject(field, e.to_string());
                None
            }
        }
    }
}

fn looks_like_email(v: &str) -> bool {
    let Some((local, domain)) = v.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !v.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_form() -> PointForm {
        let mut form = PointForm::default();
        for (field, value) in [
            ("name", "Acme"),
            ("email", "a@b.com"),
            ("whatsapp", "5511999999999"),
            ("number", "42"),
            ("latitude", "-23.5"),
            ("longitude", "-46.6"),
            ("city", "Sao Paulo"),
            ("uf", "SP"),
            ("items", "1,3"),
        ] {
            assert!(form.set(field, value.to_owned()));
        }
        form
    }

    fn fields(err: &DomainError) -> Vec<&'static str> {
        match err {
            DomainError::Validation(violations) => violations.iter().map(|v| v.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_form_produces_draft() {
        let (draft, image) = validate_point_form(&acme_form(), Some("photo.png")).unwrap();

        assert_eq!(image, "photo.png");
        assert_eq!(draft.name, "Acme");
        assert_eq!(draft.number, 42);
        assert!((draft.latitude + 23.5).abs() < f64::EPSILON);
        assert_eq!(draft.items, vec![1, 3]);

        let point = draft.with_image("abc-photo.png".to_owned());
        assert_eq!(point.image, "abc-photo.png");
        assert_eq!(point.uf, "SP");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let err = validate_point_form::<()>(&PointForm::default(), None).unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                "name",
                "email",
                "whatsapp",
                "number",
                "latitude",
                "longitude",
                "city",
                "uf",
                "items",
                "image"
            ]
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        let mut form = acme_form();
        form.set("email", "not-an-email".to_owned());
        form.set("number", "forty-two".to_owned());
        form.set("latitude", "NaN".to_owned());
        form.set("uf", "SPX".to_owned());
        form.set("items", "1,glass".to_owned());

        let err = validate_point_form(&form, Some(())).unwrap_err();
        assert_eq!(
            fields(&err),
            vec!["email", "number", "latitude", "uf", "items"]
        );
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut form = acme_form();
        form.set("name", "   ".to_owned());
        let err = validate_point_form(&form, Some(())).unwrap_err();
        assert_eq!(fields(&err), vec!["name"]);
    }

    #[test]
    fn legacy_longitude_field_name_is_accepted() {
        let mut form = acme_form();
        form.longitude = None;
        assert!(form.set("longetude", "-46.6".to_owned()));
        assert!(validate_point_form(&form, Some(())).is_ok());
    }

    #[test]
    fn unknown_fields_are_reported_to_caller() {
        let mut form = PointForm::default();
        assert!(!form.set("password", "x".to_owned()));
        assert_eq!(form, PointForm::default());
    }

    #[test]
    fn whatsapp_accepts_leading_plus() {
        let mut form = acme_form();
        form.set("whatsapp", "+5511999999999".to_owned());
        assert!(validate_point_form(&form, Some(())).is_ok());

        form.set("whatsapp", "11 9999-9999".to_owned());
        let err = validate_point_form(&form, Some(())).unwrap_err();
        assert_eq!(fields(&err), vec!["whatsapp"]);
    }

    #[test]
    fn email_requires_dotted_domain() {
        assert!(looks_like_email("a@b.com"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@@b.com"));
        assert!(!looks_like_email("a b@c.com"));
    }

    #[test]
    fn filter_requires_all_parameters() {
        let err = validate_filter(Some("SP"), None, None).unwrap_err();
        assert_eq!(fields(&err), vec!["city", "items"]);
    }

    #[test]
    fn filter_parses_item_list() {
        let filter = validate_filter(Some("SP"), Some("Sao Paulo"), Some("2, 1")).unwrap();
        assert_eq!(filter.uf, "SP");
        assert_eq!(filter.city, "Sao Paulo");
        assert_eq!(filter.items, vec![2, 1]);
    }
}
