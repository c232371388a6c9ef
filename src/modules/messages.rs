//! Secure messaging: conversation list, thread and composer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use tracing::info;

use crate::core::{Action, Context, Module, Section};
use crate::domain::messaging::{format_relative, Attachment, Conversation, Message, SenderRole};
use crate::domain::Tone;
use crate::ui::{card, theme};

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: 1,
            provider_name: "Dr. Martinez",
            provider_title: "Dr. Elena Martinez",
            specialty: "Cardiologist",
            last_message: "Your latest test results look great! Let's discuss during our next...",
            last_message_time: "2024-01-15T14:30:00",
            unread_count: 0,
            online: true,
        },
        Conversation {
            id: 2,
            provider_name: "Lisa Chen, RN",
            provider_title: "Lisa Chen",
            specialty: "Cardiac Rehabilitation Nurse",
            last_message: "I've updated your exercise plan. Please review the new routine...",
            last_message_time: "2024-01-15T09:15:00",
            unread_count: 2,
            online: false,
        },
        Conversation {
            id: 3,
            provider_name: "Dr. Johnson",
            provider_title: "Dr. Michael Johnson",
            specialty: "Cardiologist",
            last_message: "Thank you for sharing your daily readings. Everything looks...",
            last_message_time: "2024-01-14T16:45:00",
            unread_count: 0,
            online: false,
        },
    ]
}

/// The thread shown for every conversation
pub fn thread() -> Vec<Message> {
    vec![
        Message {
            id: 1,
            sender: SenderRole::Provider,
            sender_name: "Dr. Martinez",
            content: "Good morning, Sarah! I hope you're feeling well today. I wanted to follow up on your exercise progress from last week.",
            timestamp: "2024-01-15T09:00:00",
            read: true,
            urgent: false,
            attachment: None,
        },
        Message {
            id: 2,
            sender: SenderRole::Patient,
            sender_name: "You",
            content: "Good morning, Dr. Martinez! I'm feeling much better. I've been keeping up with the exercise routine and my energy levels have improved significantly.",
            timestamp: "2024-01-15T09:15:00",
            read: true,
            urgent: false,
            attachment: None,
        },
        Message {
            id: 3,
            sender: SenderRole::Provider,
            sender_name: "Dr. Martinez",
            content: "That's wonderful to hear! Your commitment to the rehabilitation program is really paying off. I've reviewed your latest vital signs, and everything looks excellent.",
            timestamp: "2024-01-15T09:30:00",
            read: true,
            urgent: false,
            attachment: None,
        },
        Message {
            id: 4,
            sender: SenderRole::Provider,
            sender_name: "Dr. Martinez",
            content: "I've attached your latest lab results for your review. All markers are within normal ranges, which is exactly what we want to see at this stage of your recovery.",
            timestamp: "2024-01-15T14:30:00",
            read: true,
            urgent: false,
            attachment: Some(Attachment {
                name: "Lab_Results_Jan_2024.pdf",
                kind: "PDF",
                size: "245 KB",
            }),
        },
    ]
}

pub struct SecureMessaging {
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
    selected_id: u32,
    draft: String,
    composing: bool,
}

impl Default for SecureMessaging {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureMessaging {
    pub fn new() -> Self {
        Self {
            conversations: conversations(),
            messages: thread(),
            selected_id: 1,
            draft: String::new(),
            composing: false,
        }
    }

    pub fn current(&self) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == self.selected_id)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn select_conversation(&mut self, id: u32) {
        if self.conversations.iter().any(|c| c.id == id) {
            self.selected_id = id;
        }
    }

    fn step_conversation(&mut self, forward: bool) {
        let Some(pos) = self
            .conversations
            .iter()
            .position(|c| c.id == self.selected_id)
        else {
            return;
        };
        let next = if forward {
            (pos + 1).min(self.conversations.len() - 1)
        } else {
            pos.saturating_sub(1)
        };
        self.selected_id = self.conversations[next].id;
    }

    pub fn send(&mut self) -> Action {
        if !self.can_send() {
            return Action::None;
        }
        let to = self.current().map(|c| c.provider_name).unwrap_or_default();
        info!(to, message = %self.draft, "message sent");
        self.draft.clear();
        Action::info(format!("Message sent to {to}"))
    }

    fn handle_composer_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.composing = false;
                Action::None
            }
            KeyCode::Enter => self.send(),
            KeyCode::Backspace => {
                self.draft.pop();
                Action::None
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.draft.push(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn inert(&self, intent: &'static str) -> Action {
        let provider = self.current().map(|c| c.provider_title).unwrap_or_default();
        info!(intent, provider, "messaging control used");
        Action::info(format!("{intent} with {provider} is not available yet"))
    }
}

impl Module for SecureMessaging {
    fn section(&self) -> Section {
        Section::Messages
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        if self.composing {
            return self.handle_composer_key(key);
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.step_conversation(true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.step_conversation(false);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('i') => {
                self.composing = true;
                Action::None
            }
            KeyCode::Char('c') => self.inert("Voice call"),
            KeyCode::Char('v') => self.inert("Video call"),
            KeyCode::Char('a') => self.inert("Attachment"),
            KeyCode::Char('n') => {
                info!("new message requested");
                Action::info("Pick a conversation and press i to write")
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Secure Messages", theme::heading())),
                Line::from(Span::styled(
                    "HIPAA-compliant communication with your care team",
                    theme::muted(),
                )),
            ]),
            rows[0],
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
            .split(rows[1]);

        self.render_conversations(frame, columns[0], ctx);
        self.render_thread(frame, columns[1], ctx);
    }

    fn captures_input(&self) -> bool {
        self.composing
    }

    fn key_hints(&self) -> &'static str {
        if self.composing {
            "type message  Enter send  Esc stop writing"
        } else {
            "j/k conversation  i write  c call  v video  a attach"
        }
    }
}

fn presence_dot(online: bool) -> Span<'static> {
    if online {
        Span::styled("● ", Style::default().fg(Color::Green))
    } else {
        Span::raw("  ")
    }
}

impl SecureMessaging {
    fn render_conversations(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let mut lines = vec![Line::from(Span::styled(
            "Your care team messages",
            theme::muted(),
        ))];
        for conversation in &self.conversations {
            let selected = conversation.id == self.selected_id;
            let bar = if selected {
                Span::styled("▌", theme::tone_style(Tone::Primary))
            } else {
                Span::raw(" ")
            };
            let mut head = vec![
                bar.clone(),
                presence_dot(conversation.online),
                Span::styled(
                    format!("({}) ", conversation.initials()),
                    theme::muted(),
                ),
                Span::styled(
                    conversation.provider_name,
                    if selected {
                        theme::selected()
                    } else {
                        Style::default().add_modifier(Modifier::BOLD)
                    },
                ),
            ];
            if conversation.unread_count > 0 {
                head.push(Span::raw(" "));
                head.push(theme::badge(
                    conversation.unread_count.to_string(),
                    Tone::Destructive,
                ));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(head));
            for detail in [
                conversation.specialty.to_string(),
                conversation.last_message.to_string(),
                format_relative(conversation.last_message_time, ctx.now),
            ] {
                lines.push(Line::from(vec![
                    bar.clone(),
                    Span::styled(format!("  {detail}"), theme::muted()),
                ]));
            }
        }
        frame.render_widget(
            Paragraph::new(lines).block(card("Conversations")),
            area,
        );
    }

    fn render_thread(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let block = card("Thread");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(conversation) = self.current() else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(inner);

        let header = vec![
            Line::from(vec![
                presence_dot(conversation.online),
                Span::styled(
                    conversation.provider_title,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled("   [c ☎] [v ▶]", theme::muted()),
            ]),
            Line::from(Span::styled(
                format!("  {}", conversation.specialty),
                theme::muted(),
            )),
            Line::from(Span::styled(
                format!("  {}", conversation.presence()),
                theme::muted(),
            )),
        ];
        frame.render_widget(Paragraph::new(header), rows[0]);

        let mut lines = Vec::new();
        for message in &self.messages {
            lines.extend(message_lines(message, ctx));
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            rows[1],
        );

        self.render_composer(frame, rows[2]);
    }

    fn render_composer(&self, frame: &mut Frame, area: Rect) {
        let text = if self.draft.is_empty() && !self.composing {
            Span::styled("Type your message...", theme::muted())
        } else if self.composing {
            Span::raw(format!("{}▏", self.draft))
        } else {
            Span::raw(self.draft.clone())
        };
        let lines = vec![
            Line::from(vec![
                Span::styled("📎 ", theme::muted()),
                text,
                Span::raw("  "),
                theme::button("Send", self.can_send()),
            ]),
            Line::from(Span::styled(
                "ⓘ All messages are HIPAA-compliant and encrypted. For urgent matters, call your provider directly.",
                theme::muted(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(card("").border_style(theme::border(self.composing))),
            area,
        );
    }
}

fn message_lines(message: &Message, ctx: &Context) -> Vec<Line<'static>> {
    let from_patient = message.sender == SenderRole::Patient;
    let alignment = if from_patient {
        Alignment::Right
    } else {
        Alignment::Left
    };
    let body_style = if from_patient {
        theme::tone_style(Tone::Primary)
    } else {
        Style::default()
    };

    let mut lines = Vec::new();
    if !from_patient {
        let mut who = vec![Span::styled(
            format!("☺ {}", message.sender_name),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if message.urgent {
            who.push(Span::raw(" "));
            who.push(theme::badge("Urgent", Tone::Destructive));
        }
        lines.push(Line::from(who));
    }
    lines.push(Line::from(Span::styled(message.content, body_style)).alignment(alignment));

    if let Some(attachment) = &message.attachment {
        lines.push(
            Line::from(vec![
                Span::styled("📎 ", theme::muted()),
                Span::styled(
                    attachment.name,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({} • {})", attachment.kind, attachment.size),
                    theme::muted(),
                ),
            ])
            .alignment(alignment),
        );
    }

    let mut meta = vec![Span::styled(
        format_relative(message.timestamp, ctx.now),
        theme::muted(),
    )];
    if from_patient {
        let tick = if message.read {
            theme::tone_style(Tone::Success)
        } else {
            theme::muted()
        };
        meta.push(Span::styled(" ✓✓", tick));
    }
    lines.push(Line::from(meta).alignment(alignment));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vitals::parse_timestamp;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_conversation_header() {
        let messaging = SecureMessaging::new();
        let current = messaging.current().expect("conversation 1");
        assert_eq!(current.provider_title, "Dr. Elena Martinez");
        assert_eq!(current.presence(), "Online");
    }

    #[test]
    fn test_selecting_conversation_keeps_thread() {
        let mut messaging = SecureMessaging::new();
        let mut ctx = Context::default();
        messaging.handle_key(key(KeyCode::Down), &mut ctx);
        let current = messaging.current().expect("conversation 2");
        assert_eq!(current.provider_title, "Lisa Chen");
        assert_eq!(current.unread_count, 2);
        assert_eq!(current.presence(), "Last seen 2 hours ago");
        assert_eq!(messaging.messages().len(), 4);

        messaging.select_conversation(99);
        assert_eq!(messaging.current().map(|c| c.id), Some(2));
    }

    #[test]
    fn test_whitespace_draft_cannot_be_sent() {
        let mut messaging = SecureMessaging::new();
        let mut ctx = Context::default();
        messaging.handle_key(key(KeyCode::Char('i')), &mut ctx);
        assert!(messaging.captures_input());
        messaging.handle_key(key(KeyCode::Char(' ')), &mut ctx);
        messaging.handle_key(key(KeyCode::Char(' ')), &mut ctx);
        assert!(!messaging.can_send());
        assert_eq!(messaging.handle_key(key(KeyCode::Enter), &mut ctx), Action::None);
        assert_eq!(messaging.draft(), "  ");
    }

    #[test]
    fn test_send_clears_draft() {
        let mut messaging = SecureMessaging::new();
        let mut ctx = Context::default();
        messaging.handle_key(key(KeyCode::Enter), &mut ctx);
        for ch in "Thanks!".chars() {
            messaging.handle_key(key(KeyCode::Char(ch)), &mut ctx);
        }
        assert!(messaging.can_send());
        let action = messaging.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(matches!(action, Action::Notify(_, _)));
        assert_eq!(messaging.draft(), "");
        assert!(messaging.is_composing());

        messaging.handle_key(key(KeyCode::Esc), &mut ctx);
        assert!(!messaging.is_composing());
    }

    #[test]
    fn test_composer_ignores_modifier_chords() {
        let mut messaging = SecureMessaging::new();
        let mut ctx = Context::default();
        messaging.handle_key(key(KeyCode::Char('i')), &mut ctx);
        messaging.handle_key(key(KeyCode::Char('o')), &mut ctx);
        messaging.handle_key(
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
            &mut ctx,
        );
        messaging.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT), &mut ctx);
        messaging.handle_key(
            KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT),
            &mut ctx,
        );
        assert_eq!(messaging.draft(), "oK");
        assert!(messaging.is_composing());
    }

    #[test]
    fn test_attachment_line() {
        let now = parse_timestamp("2024-01-15T18:00:00").expect("timestamp");
        let ctx = Context::new("Sarah", now);
        let last = thread().pop().expect("four messages");
        let text: String = message_lines(&last, &ctx)
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        assert!(text.contains("Lab_Results_Jan_2024.pdf (PDF • 245 KB)"));
        assert!(text.contains("02:30 PM"));
    }
}
