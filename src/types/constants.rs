/// XML declaration written at the top of every document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Doctype name, public identifier and system URL of the plist DTD.
pub const DOCTYPE_NAME: &str = "plist";
pub const DOCTYPE_PUBLIC_ID: &str = "-//Apple Computer//DTD PLIST 1.0//EN";
pub const DOCTYPE_SYSTEM_ID: &str = "http://www.apple.com/DTDs/PropertyList-1.0.dtd";

/// Value of the `version` attribute on the root `plist` element.
pub const PLIST_VERSION: &str = "1.0";

pub const TAG_PLIST: &str = "plist";
pub const TAG_DICT: &str = "dict";
pub const TAG_ARRAY: &str = "array";
pub const TAG_KEY: &str = "key";
pub const TAG_STRING: &str = "string";

/// Key under which a generated UUID is stored.
pub const UUID_KEY: &str = "uuid";

/// Extension of generated files when none is configured.
pub const DEFAULT_EXTENSION: &str = "tm";

/// One indentation level in the serialized XML.
pub const DEFAULT_INDENT: &str = "    ";

/// Full doctype line, e.g. `<!DOCTYPE plist PUBLIC "..." "...">`.
pub fn doctype_line() -> String {
    format!(
        "<!DOCTYPE {} PUBLIC \"{}\" \"{}\">",
        DOCTYPE_NAME, DOCTYPE_PUBLIC_ID, DOCTYPE_SYSTEM_ID
    )
}
