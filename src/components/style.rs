use crate::tags::Tag;

pub const MAX_WIDTH: &str = "max-width: 1152px; margin: 0 auto;";

pub fn page() -> String {
    "min-height: 100vh; font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; \
     color: #1e293b; background: linear-gradient(180deg, #f0f9ff, #ffffff 50%, #eef2ff);"
        .into()
}

pub fn card() -> String {
    "border: 1px solid #dbeafe; border-radius: 12px; padding: 16px; background: #fff; \
     display: flex; flex-direction: column; box-shadow: 0 1px 2px rgba(15, 23, 42, 0.06);"
        .into()
}

pub fn btn_primary() -> String {
    "padding: 10px 12px; border-radius: 10px; border: 1px solid #2563eb; background: #2563eb; \
     color: #fff; cursor: pointer; font-size: 14px;"
        .into()
}

pub fn nav_btn(active: bool) -> String {
    let mut s = String::from(
        "padding: 8px 14px; border-radius: 999px; border: none; color: #fff; cursor: pointer; \
         display: inline-flex; align-items: center; gap: 8px; font-size: 14px;",
    );
    if active {
        s.push_str("background: rgba(255, 255, 255, 0.25); box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);");
    } else {
        s.push_str("background: transparent;");
    }
    s
}

pub fn tag_chip(tag: Tag) -> String {
    let (bg, fg) = tag.palette();
    format!(
        "height: 28px; padding: 0 12px; border-radius: 999px; border: 1px solid transparent; \
         font-size: 12px; cursor: pointer; background: {bg}; color: {fg};"
    )
}

pub fn tag_badge(tag: Tag) -> String {
    let (bg, fg) = tag.palette();
    format!("padding: 2px 10px; border-radius: 999px; font-size: 12px; background: {bg}; color: {fg};")
}

pub fn overlay() -> String {
    "position: fixed; inset: 0; z-index: 100; background: rgba(15, 23, 42, 0.4); \
     backdrop-filter: blur(4px); display: flex; align-items: center; justify-content: center;"
        .into()
}

pub fn dialog() -> String {
    "position: relative; width: min(92vw, 720px); max-height: 85vh; overflow: auto; \
     border-radius: 12px; border: 1px solid #e2e8f0; background: #fff; padding: 24px; \
     box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);"
        .into()
}

pub fn close_btn() -> String {
    "position: absolute; top: 8px; right: 12px; border: none; background: transparent; \
     font-size: 22px; font-weight: 700; color: #475569; cursor: pointer;"
        .into()
}
