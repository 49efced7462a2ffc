use shared::{AttachmentInfo, FieldName};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AttachmentPickerProps {
    pub attachment: Option<AttachmentInfo>,
    pub max_bytes: u64,
    pub disabled: bool,
    pub on_selected: Callback<AttachmentInfo>,
    pub on_removed: Callback<()>,
}

pub fn attachment_from_file(file: &web_sys::File) -> AttachmentInfo {
    AttachmentInfo {
        file_name: file.name(),
        mime_type: file.type_(),
        size_bytes: file.size() as u64,
    }
}

/// Human-readable size, e.g. "2.5 MB"
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= MB {
        format!("{:.1} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[function_component(AttachmentPicker)]
pub fn attachment_picker(props: &AttachmentPickerProps) -> Html {
    let on_change = {
        let on_selected = props.on_selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_selected.emit(attachment_from_file(&file));
            }
            // clear so choosing the same file again still fires a change
            input.set_value("");
        })
    };

    let on_remove = {
        let on_removed = props.on_removed.clone();
        Callback::from(move |_: MouseEvent| on_removed.emit(()))
    };

    html! {
        <div class="form-group attachment-picker">
            <label for={FieldName::Attachment.as_str()}>{FieldName::Attachment.label()}</label>
            <input
                type="file"
                id={FieldName::Attachment.as_str()}
                accept=".pdf,.doc,.docx,image/*,text/*"
                onchange={on_change}
                disabled={props.disabled}
            />
            <small class="field-hint">
                {format!("PDF, image, text, or Word files under {}", format_file_size(props.max_bytes))}
            </small>

            {if let Some(file) = props.attachment.as_ref() {
                html! {
                    <div class="staged-attachment">
                        <span class="attachment-name">{&file.file_name}</span>
                        <span class="attachment-size">{format_file_size(file.size_bytes)}</span>
                        <button
                            type="button"
                            class="btn btn-link remove-attachment"
                            onclick={on_remove}
                            disabled={props.disabled}
                        >
                            {"Remove"}
                        </button>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
