//! Assembles the CV form's text fields, collected from multipart parts,
//! into a typed `CvProfileForm`.

use std::collections::HashMap;

use crate::errors::AppError;
use crate::models::catalog::EmploymentType;
use crate::models::forms::CvProfileForm;
use crate::models::profile::Specialization;

/// Text parts keyed by field name. Both `snake_case` and the browser form's
/// `camelCase` names are accepted.
#[derive(Debug, Default)]
pub struct CvFormFields {
    values: HashMap<String, String>,
}

impl CvFormFields {
    pub fn insert(&mut self, name: &str, value: String) {
        self.values.insert(to_snake_case(name), value);
    }

    fn required(&self, name: &str) -> Result<String, AppError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::Validation(format!("missing form field '{name}'")))
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.values.get(name).filter(|v| !v.is_empty()).cloned()
    }

    /// Checkbox semantics: an unchecked box is simply not posted.
    fn checkbox(&self, name: &str) -> bool {
        matches!(
            self.values.get(name).map(|v| v.to_ascii_lowercase()).as_deref(),
            Some("on" | "true" | "1" | "yes")
        )
    }

    pub fn into_form(self) -> Result<CvProfileForm, AppError> {
        let specialization = self.required("specialization")?;
        let specialization = Specialization::parse(&specialization).ok_or_else(|| {
            AppError::Validation(format!("unknown specialization '{specialization}'"))
        })?;

        let availability = self.required("availability")?;
        let availability = parse_employment_type(&availability).ok_or_else(|| {
            AppError::Validation(format!("unknown availability '{availability}'"))
        })?;

        Ok(CvProfileForm {
            full_name: self.required("full_name")?,
            email: self.required("email")?,
            phone: self.required("phone")?,
            portfolio: self.optional("portfolio"),
            specialization,
            availability,
            experience: self.required("experience")?,
            expected_salary: self.optional("expected_salary"),
            skills: self.required("skills")?,
            education: self.required("education")?,
            location: self.required("location")?,
            relocate: self.checkbox("relocate"),
            about: self.required("about")?,
        })
    }
}

fn parse_employment_type(raw: &str) -> Option<EmploymentType> {
    match raw {
        "full-time" => Some(EmploymentType::FullTime),
        "part-time" => Some(EmploymentType::PartTime),
        "contract" => Some(EmploymentType::Contract),
        "freelance" => Some(EmploymentType::Freelance),
        _ => None,
    }
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
