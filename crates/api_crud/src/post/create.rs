use crate::require_profile;
use talkuvo_api_common::{
  context::TalkuvoContext,
  post::{CreatePost, PostResponse},
};
use talkuvo_db_schema::{
  enums::PostType,
  source::{
    community::Community,
    post::{Post, PostInsertForm},
  },
  traits::Crud,
};
use talkuvo_utils::{
  error::{TalkuvoErrorType, TalkuvoResult},
  utils::validation::is_valid_post_title,
};

pub async fn create_post(data: &CreatePost, context: &TalkuvoContext) -> TalkuvoResult<PostResponse> {
  let author = require_profile(context).await?;
  is_valid_post_title(&data.title)?;

  // A post carries exactly the body field its type calls for.
  match data.post_type {
    PostType::Text if data.body.is_none() || data.url.is_some() || data.image_url.is_some() => {
      Err(TalkuvoErrorType::InvalidBodyField)?
    }
    PostType::Link if data.url.is_none() || data.body.is_some() || data.image_url.is_some() => {
      Err(TalkuvoErrorType::InvalidUrl)?
    }
    PostType::Image if data.image_url.is_none() || data.body.is_some() || data.url.is_some() => {
      Err(TalkuvoErrorType::InvalidUrl)?
    }
    _ => {}
  }

  Community::read(context.store(), data.community_id).await?;

  let mut form = PostInsertForm::new(data.title.clone(), author.id, data.community_id);
  form.post_type = data.post_type;
  form.content = data.body.clone();
  form.url = data.url.as_ref().map(|u| u.to_string());
  form.image_url = data.image_url.as_ref().map(|u| u.to_string());

  let post = Post::create(context.store(), &form).await?;
  Ok(PostResponse { post })
}
