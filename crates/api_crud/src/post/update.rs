use crate::require_profile;
use talkuvo_api_common::{
  context::TalkuvoContext,
  post::{EditPost, PostResponse},
};
use talkuvo_db_schema::{
  enums::PostType,
  source::post::{Post, PostUpdateForm},
  traits::Crud,
};
use talkuvo_utils::{
  error::{TalkuvoErrorType, TalkuvoResult},
  utils::validation::is_valid_post_title,
};

/// Authors edit their own posts, nobody else's.
pub async fn edit_post(data: &EditPost, context: &TalkuvoContext) -> TalkuvoResult<PostResponse> {
  let editor = require_profile(context).await?;
  let post = Post::read(context.store(), data.post_id).await?;
  if post.author_id != editor.id {
    Err(TalkuvoErrorType::NoPostEditAllowed)?
  }
  if let Some(title) = &data.title {
    is_valid_post_title(title)?;
  }
  // Only text posts carry a text body; an edit must not grow a second body
  // field on a link or image post.
  if data.body.is_some() && post.post_type != PostType::Text {
    Err(TalkuvoErrorType::InvalidBodyField)?
  }

  let form = PostUpdateForm {
    title: data.title.clone(),
    content: data.body.clone().map(Some),
    ..Default::default()
  };
  let post = Post::update(context.store(), data.post_id, &form).await?;
  Ok(PostResponse { post })
}
