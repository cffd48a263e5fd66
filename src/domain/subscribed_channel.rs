use unicode_segmentation::UnicodeSegmentation;

const MAX_CHAR_LENGHT: usize = 256;

/// Label of the channel a subscriber follows (eg: "Tech Insights").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribedChannel(String);

impl SubscribedChannel {
    pub fn parse(channel: String) -> Result<SubscribedChannel, String> {
        let is_empty_or_whitespace = channel.trim().is_empty();
        let is_too_long = channel.graphemes(true).count() > MAX_CHAR_LENGHT;

        if is_empty_or_whitespace || is_too_long {
            return Err(format!("{} is not a valid channel", channel));
        }

        Ok(Self(channel))
    }
}

impl AsRef<str> for SubscribedChannel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
