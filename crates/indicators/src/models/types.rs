use std::borrow::Cow;

/// Provider identifier - mostly static constants ("world_bank", "imf", ...)
pub type ProviderId = Cow<'static, str>;

/// Period token: "YYYY", "YYYY-Qn", "YYYY-MM" or "YYYY-MM-DD"
pub type Period = String;
