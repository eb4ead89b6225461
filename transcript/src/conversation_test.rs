use super::*;
use crate::message::GroundingSource;

fn last(conversation: &Conversation) -> &Message {
    conversation.messages().last().expect("at least one message")
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_conversation_has_greeting_only() {
    let conversation = Conversation::new();
    assert_eq!(conversation.messages().len(), 1);
    let greeting = &conversation.messages()[0];
    assert_eq!(greeting.id, GREETING_ID);
    assert_eq!(greeting.sender, Sender::Ai);
    assert_eq!(greeting.text.as_deref(), Some(GREETING_TEXT));
    assert!(!conversation.is_loading());
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_appends_user_message_and_sets_loading() {
    let mut conversation = Conversation::new();
    let sent = conversation.begin_send("oi").expect("accepted");
    assert_eq!(sent, "oi");
    assert!(conversation.is_loading());
    assert!(last(&conversation).is_user());
    assert_eq!(last(&conversation).text.as_deref(), Some("oi"));
}

#[test]
fn begin_send_rejects_blank_input() {
    let mut conversation = Conversation::new();
    assert_eq!(conversation.begin_send("   "), Err(SendRejected::Empty));
    assert_eq!(conversation.messages().len(), 1);
    assert!(!conversation.is_loading());
}

#[test]
fn second_send_while_loading_is_rejected() {
    let mut conversation = Conversation::new();
    conversation.begin_send("primeira").expect("accepted");
    assert_eq!(conversation.begin_send("segunda"), Err(SendRejected::Busy));
    assert_eq!(conversation.messages().len(), 2);
}

#[test]
fn rejection_messages_are_user_facing() {
    assert_eq!(SendRejected::Empty.to_string(), "A mensagem não pode estar vazia.");
}

// =============================================================
// append_ai
// =============================================================

#[test]
fn error_response_becomes_single_ai_text_and_clears_loading() {
    let mut conversation = Conversation::new();
    conversation.begin_send("oi").expect("accepted");
    let before = conversation.messages().len();

    conversation.append_ai(&AiResponse::error("Sua chave..."), "oi");

    assert_eq!(conversation.messages().len(), before + 1);
    let reply = last(&conversation);
    assert_eq!(reply.sender, Sender::Ai);
    assert_eq!(reply.text.as_deref(), Some("Sua chave..."));
    assert!(reply.image_url.is_none());
    assert!(!conversation.is_loading());
}

#[test]
fn text_response_carries_sources() {
    let mut conversation = Conversation::new();
    let sources = vec![GroundingSource { uri: "https://x.test".to_owned(), title: "X".to_owned() }];
    conversation.append_ai(&AiResponse::Text { text: "resposta".to_owned(), sources: sources.clone() }, "q");
    assert_eq!(last(&conversation).sources, sources);
}

#[test]
fn empty_text_response_uses_fallback() {
    let mut conversation = Conversation::new();
    conversation.append_ai(&AiResponse::Text { text: String::new(), sources: Vec::new() }, "q");
    assert_eq!(last(&conversation).text.as_deref(), Some(EMPTY_REPLY_TEXT));
}

#[test]
fn image_response_keeps_remote_caption() {
    let mut conversation = Conversation::new();
    let response = AiResponse::Image { image_url: "data:image/jpeg;base64,AA".to_owned(), text: Some("legenda".to_owned()) };
    conversation.append_ai(&response, "/imagem gato");
    let reply = last(&conversation);
    assert_eq!(reply.image_url.as_deref(), Some("data:image/jpeg;base64,AA"));
    assert_eq!(reply.text.as_deref(), Some("legenda"));
}

#[test]
fn image_without_caption_after_command_uses_prompt_caption() {
    let mut conversation = Conversation::new();
    let response = AiResponse::Image { image_url: "data:image/jpeg;base64,AA".to_owned(), text: None };
    conversation.append_ai(&response, "/imagem  um gato no espaço ");
    assert_eq!(
        last(&conversation).text.as_deref(),
        Some("Aqui está a imagem que criei para você com o prompt: \"um gato no espaço\"")
    );
}

#[test]
fn image_without_caption_after_edit_uses_edit_caption() {
    let mut conversation = Conversation::new();
    let response = AiResponse::Image { image_url: "data:image/png;base64,AA".to_owned(), text: None };
    conversation.append_ai(&response, "deixe azul");
    assert_eq!(last(&conversation).text.as_deref(), Some(EDITED_IMAGE_CAPTION));
}

#[test]
fn fail_unexpected_appends_generic_error() {
    let mut conversation = Conversation::new();
    conversation.begin_send("oi").expect("accepted");
    conversation.fail_unexpected();
    assert_eq!(last(&conversation).text.as_deref(), Some(UNEXPECTED_ERROR_TEXT));
    assert!(!conversation.is_loading());
}

// =============================================================
// Scroll signal and ids
// =============================================================

#[test]
fn every_change_bumps_scroll_seq() {
    let mut conversation = Conversation::new();
    let start = conversation.scroll_seq();
    conversation.begin_send("oi").expect("accepted");
    let after_send = conversation.scroll_seq();
    assert!(after_send > start);
    conversation.append_ai(&AiResponse::error("x"), "oi");
    assert!(conversation.scroll_seq() > after_send);
}

#[test]
fn message_ids_are_unique() {
    let mut conversation = Conversation::new();
    conversation.append_user("a");
    conversation.append_user("b");
    let ids: std::collections::HashSet<_> = conversation.messages().iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids.len(), 3);
}
