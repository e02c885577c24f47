//! Chat panel component for the financial advisor

use dioxus::prelude::*;
use metrics_client::MetricsClient;

use crate::components::LoadingDots;
use crate::config;
use crate::state::{prepare_outgoing, ChatLog, ChatMessage, Sender};

#[derive(Props, Clone, PartialEq)]
pub struct ChatPanelProps {
    pub is_open: bool,
    pub on_close: EventHandler<()>,
}

/// Chat panel component
#[component]
pub fn ChatPanel(props: ChatPanelProps) -> Element {
    let client = use_signal(|| MetricsClient::new(config::get().api_base_url.clone()));
    let mut log = use_signal(ChatLog::new);
    let mut input = use_signal(String::new);
    let mut is_sending = use_signal(|| false);

    let send_message = move |_| {
        let Some(content) = prepare_outgoing(&input.read(), *is_sending.read()) else {
            return;
        };

        log.write().push_user(content.clone());
        input.set(String::new());
        is_sending.set(true);

        let client = client.peek().clone();
        spawn(async move {
            match client.chat(&content).await {
                Ok(reply) => log.write().push_reply(reply),
                Err(e) => {
                    tracing::warn!(error = %e, "Advisor chat failed");
                    log.write().push_unavailable();
                }
            }
            is_sending.set(false);
        });
    };

    if !props.is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-y-0 right-0 w-96 bg-white shadow-xl border-l border-stone-200 flex flex-col z-50",

            // Header
            div {
                class: "flex items-center justify-between px-4 py-3 border-b border-stone-200 bg-emerald-50",
                div {
                    class: "flex items-center gap-2",
                    span { class: "text-xl", "\u{1F916}" }
                    h2 { class: "font-semibold text-stone-900", "Financial AI Advisor" }
                }
                button {
                    class: "text-stone-500 hover:text-stone-700 p-1 rounded hover:bg-stone-100",
                    aria_label: "Close chat",
                    onclick: move |_| props.on_close.call(()),
                    // X icon
                    svg {
                        class: "w-5 h-5",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M6 18L18 6M6 6l12 12"
                        }
                    }
                }
            }

            // Messages
            div {
                class: "flex-1 overflow-y-auto p-4 space-y-4",
                for message in log.read().messages().iter() {
                    MessageBubble { key: "{message.id}", message: message.clone() }
                }
                if *is_sending.read() {
                    div {
                        class: "flex justify-start",
                        div {
                            class: "bg-stone-100 text-stone-900 rounded-lg px-4 py-2",
                            LoadingDots {}
                        }
                    }
                }
            }

            // Input
            form {
                class: "border-t border-stone-200 p-4",
                onsubmit: send_message,
                div {
                    class: "flex gap-2",
                    input {
                        r#type: "text",
                        value: "{input}",
                        oninput: move |e| input.set(e.value()),
                        placeholder: "Ask about stocks, investing, or market analysis...",
                        class: "flex-1 px-4 py-2 border border-stone-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:border-transparent",
                        disabled: *is_sending.read()
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: input.read().trim().is_empty() || *is_sending.read(),
                        "Send"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MessageBubbleProps {
    message: ChatMessage,
}

#[component]
fn MessageBubble(props: MessageBubbleProps) -> Element {
    let is_user = props.message.sender == Sender::User;
    let time = props.message.sent_at.format("%H:%M").to_string();

    rsx! {
        div {
            class: if is_user { "flex justify-end" } else { "flex justify-start" },
            div {
                class: if is_user {
                    "max-w-[80%] rounded-lg px-4 py-2 bg-emerald-600 text-white"
                } else {
                    "max-w-[80%] rounded-lg px-4 py-2 bg-stone-100 text-stone-900"
                },
                p { class: "text-sm whitespace-pre-wrap", "{props.message.text}" }
                p {
                    class: if is_user { "text-xs mt-1 text-emerald-200" } else { "text-xs mt-1 text-stone-400" },
                    "{time}"
                }
            }
        }
    }
}
