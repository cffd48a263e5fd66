const MAX_ID_LENGHT: usize = 64;

/// Opaque identifier taken from the request path. Each store decides whether it can
/// resolve it (eg: MongoDB only understands 24 hex chars ObjectIds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberId(String);

impl SubscriberId {
    pub fn parse(id: String) -> Result<SubscriberId, String> {
        if id.trim().is_empty() || id.chars().count() > MAX_ID_LENGHT {
            return Err(format!("{} is not a valid subscriber id", id));
        }

        Ok(Self(id))
    }
}

impl AsRef<str> for SubscriberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
