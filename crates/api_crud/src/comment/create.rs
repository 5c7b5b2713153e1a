use crate::require_profile;
use talkuvo_api_common::{
  comment::{CommentResponse, CreateComment},
  context::TalkuvoContext,
};
use talkuvo_db_schema::{
  source::{
    comment::{Comment, CommentInsertForm},
    post::Post,
  },
  traits::Crud,
};
use talkuvo_utils::error::{TalkuvoErrorType, TalkuvoResult};

pub async fn create_comment(
  data: &CreateComment,
  context: &TalkuvoContext,
) -> TalkuvoResult<CommentResponse> {
  let author = require_profile(context).await?;
  if data.content.trim().is_empty() {
    Err(TalkuvoErrorType::CouldntCreateComment)?
  }
  let post = Post::read(context.store(), data.post_id).await?;

  // A reply must land in the same thread as its parent.
  if let Some(parent_id) = data.parent_id {
    let parent = Comment::read(context.store(), parent_id).await?;
    if parent.post_id != post.id {
      Err(TalkuvoErrorType::CouldntCreateComment)?
    }
  }

  let mut form = CommentInsertForm::new(data.content.clone(), author.id, post.id);
  form.parent_id = data.parent_id;
  let comment = Comment::create(context.store(), &form).await?;
  Ok(CommentResponse { comment })
}

#[cfg(test)]
pub(crate) mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use crate::post::create::{create_post, tests::seeded_context};
  use pretty_assertions::assert_eq;
  use talkuvo_api_common::post::CreatePost;
  use talkuvo_db_schema::{enums::PostType, newtypes::PostId};
  use uuid::Uuid;

  pub(crate) async fn context_with_post() -> (TalkuvoContext, PostId) {
    let (context, community_id) = seeded_context().await;
    let post = create_post(
      &CreatePost {
        title: "Hello".to_string(),
        community_id,
        post_type: PostType::Text,
        body: Some("first".to_string()),
        url: None,
        image_url: None,
      },
      &context,
    )
    .await
    .unwrap()
    .post;
    (context, post.id)
  }

  #[tokio::test]
  async fn comment_and_reply() {
    let (context, post_id) = context_with_post().await;
    let top = create_comment(
      &CreateComment {
        post_id,
        content: "nice post".to_string(),
        parent_id: None,
      },
      &context,
    )
    .await
    .unwrap()
    .comment;

    let reply = create_comment(
      &CreateComment {
        post_id,
        content: "agreed".to_string(),
        parent_id: Some(top.id),
      },
      &context,
    )
    .await
    .unwrap()
    .comment;
    assert_eq!(Some(top.id), reply.parent_id);
  }

  #[tokio::test]
  async fn reply_must_stay_in_thread() {
    let (context, post_id) = context_with_post().await;
    let parent = create_comment(
      &CreateComment {
        post_id,
        content: "nice post".to_string(),
        parent_id: None,
      },
      &context,
    )
    .await
    .unwrap()
    .comment;

    let other_post = create_post(
      &CreatePost {
        title: "Other".to_string(),
        community_id: Post::read(context.store(), post_id).await.unwrap().community_id,
        post_type: PostType::Text,
        body: Some("second".to_string()),
        url: None,
        image_url: None,
      },
      &context,
    )
    .await
    .unwrap()
    .post;

    // Parent belongs to the first post, reply targets the second.
    let err = create_comment(
      &CreateComment {
        post_id: other_post.id,
        content: "lost".to_string(),
        parent_id: Some(parent.id),
      },
      &context,
    )
    .await
    .unwrap_err();
    assert_eq!(TalkuvoErrorType::CouldntCreateComment, err.error_type);

    // Unknown post is a plain not-found.
    let err = create_comment(
      &CreateComment {
        post_id: PostId(Uuid::new_v4()),
        content: "where am i".to_string(),
        parent_id: None,
      },
      &context,
    )
    .await
    .unwrap_err();
    assert_eq!(TalkuvoErrorType::NotFound, err.error_type);
  }

  #[tokio::test]
  async fn blank_content_is_rejected() {
    let (context, post_id) = context_with_post().await;
    let err = create_comment(
      &CreateComment {
        post_id,
        content: "   ".to_string(),
        parent_id: None,
      },
      &context,
    )
    .await
    .unwrap_err();
    assert_eq!(TalkuvoErrorType::CouldntCreateComment, err.error_type);
  }
}
