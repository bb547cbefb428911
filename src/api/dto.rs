//! Backend Request/Response Shapes
//!
//! The backend serializes decimal columns as strings and nullable columns as
//! `null`, so the response types decode leniently: numbers may arrive as
//! numeric strings, text may be `null`, and missing lists are empty.

use serde::{Deserialize, Serialize};

use super::error::ViewError;

// ============================================
// Entities
// ============================================

/// A registered store
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Store {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nome: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub descricao: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub endereco: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub contato: String,
}

/// A product stocked by one store, with the store's own quantity and price
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StockItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub produto_nome: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub categoria_nome: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub quantidade_estoque: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub preco_loja: Option<f64>,
}

/// A sale shown on a store's dashboard
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Sale {
    #[serde(default, deserialize_with = "lenient::text")]
    pub produto_nome: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub quantidade: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub valor_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub data_venda: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub data_formatada: Option<String>,
}

/// One line of the global sales history
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub loja_nome: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub produto_nome: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub quantidade: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub valor_total: Option<f64>,
    /// Already formatted by the backend (`dd/mm/yyyy HH:MM`)
    #[serde(default, deserialize_with = "lenient::text")]
    pub data_formatada: String,
}

/// A product from the catalog
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::integer")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nome: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub categoria_nome: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub preco: Option<f64>,
}

// ============================================
// Responses
// ============================================

/// Reply to a POST: either `{message}` or `{error}`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ActionReply {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub error: Option<String>,
}

impl ActionReply {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(error.into()),
        }
    }

    /// A reply without a message is a server error, described by `error`
    /// or by `fallback` when the backend gave no text.
    pub fn into_outcome(self, fallback: &str) -> Result<String, ViewError> {
        match self.message {
            Some(message) => Ok(message),
            None => Err(ViewError::Server(
                self.error.unwrap_or_else(|| fallback.to_string()),
            )),
        }
    }
}

/// `GET /lojas`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StoreList {
    #[serde(default, deserialize_with = "lenient::list")]
    pub lojas: Vec<Store>,
}

/// `GET /dashboard/{id}`
///
/// A missing `loja` means the store does not exist.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Dashboard {
    #[serde(default)]
    pub loja: Option<Store>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub estoque: Vec<StockItem>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub vendas: Vec<Sale>,
}

/// `GET /historico`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct History {
    #[serde(default, deserialize_with = "lenient::list")]
    pub historico: Vec<HistoryEntry>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub total_vendas: i64,
}

/// `GET /produtos`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProductList {
    #[serde(default, deserialize_with = "lenient::list")]
    pub produtos: Vec<Product>,
}

/// `GET /status`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceStatus {
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub database: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub timestamp: Option<String>,
}

// ============================================
// Form payloads
// ============================================

/// Store registration form (`cadastro-loja-form`)
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StoreForm {
    pub nome: String,
    pub descricao: String,
    pub endereco: String,
    pub contato: String,
}

impl StoreForm {
    pub fn new(
        nome: impl Into<String>,
        descricao: impl Into<String>,
        endereco: impl Into<String>,
        contato: impl Into<String>,
    ) -> Self {
        Self {
            nome: nome.into(),
            descricao: descricao.into(),
            endereco: endereco.into(),
            contato: contato.into(),
        }
    }
}

/// Product-to-store association form (`associar-produto-form`)
///
/// Blank stock quantity and blank price are sent as `0`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AssociationForm {
    pub loja_id: String,
    pub produto_id: String,
    #[serde(serialize_with = "blank_as::zero")]
    pub quantidade_estoque: String,
    #[serde(serialize_with = "blank_as::zero")]
    pub preco_loja: String,
}

impl AssociationForm {
    pub fn new(loja_id: impl Into<String>, produto_id: impl Into<String>) -> Self {
        Self {
            loja_id: loja_id.into(),
            produto_id: produto_id.into(),
            ..Default::default()
        }
    }

    pub fn stock(mut self, quantidade: impl Into<String>) -> Self {
        self.quantidade_estoque = quantidade.into();
        self
    }

    pub fn price(mut self, preco: impl Into<String>) -> Self {
        self.preco_loja = preco.into();
        self
    }
}

/// Sale registration form (`venda-form`)
///
/// A blank quantity is sent as `1`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SaleForm {
    pub loja_id: String,
    pub produto_id: String,
    #[serde(serialize_with = "blank_as::one")]
    pub quantidade: String,
    pub valor_total: String,
}

impl SaleForm {
    pub fn new(
        loja_id: impl Into<String>,
        produto_id: impl Into<String>,
        quantidade: impl Into<String>,
        valor_total: impl Into<String>,
    ) -> Self {
        Self {
            loja_id: loja_id.into(),
            produto_id: produto_id.into(),
            quantidade: quantidade.into(),
            valor_total: valor_total.into(),
        }
    }
}

mod blank_as {
    use serde::Serializer;

    fn or_default<S: Serializer>(value: &str, default: &str, s: S) -> Result<S::Ok, S::Error> {
        let trimmed = value.trim();
        s.serialize_str(if trimmed.is_empty() { default } else { trimmed })
    }

    pub fn zero<S: Serializer>(value: &String, s: S) -> Result<S::Ok, S::Error> {
        or_default(value, "0", s)
    }

    pub fn one<S: Serializer>(value: &String, s: S) -> Result<S::Ok, S::Error> {
        or_default(value, "1", s)
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
    }

    pub fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or_default(),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or_default()
            }
            _ => 0,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(optional_text(d)?.unwrap_or_default())
    }

    /// `null`, missing and empty strings all become `None`
    pub fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
    }
}
