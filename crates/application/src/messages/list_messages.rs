use std::collections::HashMap;

use parlor_core::UserId;
use parlor_infrastructure::Backend;

use super::dtos::{ListMessagesRequest, MessageDto};
use super::MessageError;
use crate::Config;

pub struct ListMessagesUseCase;

impl ListMessagesUseCase {
    /// Room history, oldest first, capped at the requested or configured
    /// limit, with each row enriched with sender display fields.
    pub async fn execute(
        backend: &Backend,
        config: &Config,
        req: ListMessagesRequest,
    ) -> Result<Vec<MessageDto>, MessageError> {
        if backend
            .rooms
            .find_member(&req.room_id, &req.caller_id)
            .await?
            .is_none()
        {
            return Err(MessageError::NotAMember);
        }

        let limit = req.limit.unwrap_or(config.message_page_limit);
        let messages = backend.messages.list_for_room(&req.room_id, limit).await?;

        // One profile fetch per distinct sender.
        let mut profiles: HashMap<UserId, (String, Option<String>)> = HashMap::new();
        let mut rows = Vec::with_capacity(messages.len());
        for message in messages {
            if !profiles.contains_key(&message.sender_id) {
                let entry = match backend.users.find_by_id(&message.sender_id).await? {
                    Some(user) => (user.visible_name().to_string(), user.avatar_url),
                    None => (message.sender_id.to_string(), None),
                };
                profiles.insert(message.sender_id.clone(), entry);
            }
            let (name, avatar) = profiles[&message.sender_id].clone();
            rows.push(MessageDto::from_message(message, name, avatar));
        }
        Ok(rows)
    }
}
