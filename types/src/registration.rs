use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the `list_users.php` collection.
///
/// Fields are read as the PHP backend emits them: numbers may arrive as strings and
/// text columns may be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(deserialize_with = "lenient::number")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub token: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub document_number: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub parent1: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub parent2: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub photo_path: String,
    #[serde(default)]
    pub validation: Validation,
    #[serde(default, deserialize_with = "lenient::text")]
    pub expiry_date: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_expired: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub qr_code_path: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub id_user: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: String,
}

impl Registration {
    pub fn photo_path(&self) -> Option<&str> {
        Some(self.photo_path.as_str()).filter(|p| !p.is_empty())
    }

    pub fn parent1_or_dash(&self) -> &str {
        or_dash(&self.parent1)
    }

    pub fn parent2_or_dash(&self) -> &str {
        or_dash(&self.parent2)
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    #[default]
    Pending,
    Verified,
}

impl Validation {
    pub fn is_verified(self) -> bool {
        self == Validation::Verified
    }

    pub fn label(self) -> &'static str {
        match self {
            Validation::Pending => "Pendente",
            Validation::Verified => "Verificado",
        }
    }
}

// Anything other than the string "verified" is shown as pending, whatever its type.
impl<'de> Deserialize<'de> for Validation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) if s == "verified" => Validation::Verified,
            _ => Validation::Pending,
        })
    }
}

pub(crate) mod lenient {
    use serde::de::{self, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().and_then(whole))
                .ok_or_else(|| de::Error::custom(format!("expected unsigned integer, got {n}"))),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("expected numeric string, got {s:?}"))),
            other => Err(de::Error::custom(format!("expected number, got {other}"))),
        }
    }

    // PHP emits `45.0` for some computed totals.
    fn whole(f: f64) -> Option<u64> {
        (f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
    }

    pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            other => number(other).map(Some).map_err(de::Error::custom),
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional_text(deserializer)?.unwrap_or_default())
    }

    pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            other => Err(de::Error::custom(format!("expected text, got {other}"))),
        }
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_f64().is_some_and(|n| n != 0.0)),
            Value::String(s) => match s.trim() {
                "" | "0" | "false" => Ok(false),
                "1" | "true" => Ok(true),
                _ => Err(de::Error::custom(format!("expected boolean, got {s:?}"))),
            },
            other => Err(de::Error::custom(format!("expected boolean, got {other}"))),
        }
    }
}
