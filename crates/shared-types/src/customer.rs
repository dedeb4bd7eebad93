use serde::{Deserialize, Serialize};

/// A customer choice offered by the invoice form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

impl CustomerField {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Look up a customer by id.
pub fn find_customer<'a>(customers: &'a [CustomerField], id: &str) -> Option<&'a CustomerField> {
    customers.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_customer_matches_exact_id() {
        let customers = vec![
            CustomerField::new("c1", "Evil Rabbit"),
            CustomerField::new("c2", "Delba de Oliveira"),
        ];
        assert_eq!(find_customer(&customers, "c2").unwrap().name, "Delba de Oliveira");
        assert!(find_customer(&customers, "C2").is_none());
        assert!(find_customer(&customers, "").is_none());
    }
}
