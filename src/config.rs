#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:5000"  // Flask dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin as the page in production
}

pub fn endpoint(path: &str) -> String {
    format!("{}{}", get_backend_url(), path)
}

pub const CONTACT_COUNT_PATH: &str = "/api/contacts/count";
pub const TEMPLATES_PATH: &str = "/api/templates";

/// Root element that marks the new-campaign page.
pub const CAMPAIGN_ROOT_ID: &str = "new-campaign";

/// Written into the recipient count when the count request fails.
pub const COUNT_ERROR_TEXT: &str = "Error";
pub const EMPTY_SUMMARY_NAME: &str = "--";
pub const REMOVE_TAG_LABEL: &str = "×";

// User-facing text, matching the language of the server-rendered page.
pub const TEMPLATE_PLACEHOLDER: &str = "اختر قالب...";
pub const EMPTY_TEMPLATE_ALERT: &str = "لا يمكن حفظ قالب فارغ.";
pub const TEMPLATE_NAME_PROMPT: &str = "الرجاء إدخال اسم للقالب:";
pub const TEMPLATE_SAVED_ALERT: &str = "تم حفظ القالب بنجاح!";
pub const TEMPLATE_SAVE_FAILED_ALERT: &str = "حدث خطأ أثناء حفظ القالب.";
pub const SERVER_ERROR_PREFIX: &str = "خطأ: ";
