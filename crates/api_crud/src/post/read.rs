use talkuvo_api_common::{
  context::TalkuvoContext,
  post::{GetPost, GetPosts, GetPostsResponse, PostResponse},
};
use talkuvo_db_schema::{source::post::Post, traits::Crud};
use talkuvo_utils::error::TalkuvoResult;

pub async fn get_post(data: &GetPost, context: &TalkuvoContext) -> TalkuvoResult<PostResponse> {
  let post = Post::read(context.store(), data.post_id).await?;
  Ok(PostResponse { post })
}

/// Feed query, newest first. A `community_id` narrows it to one community
/// page.
pub async fn get_posts(data: &GetPosts, context: &TalkuvoContext) -> TalkuvoResult<GetPostsResponse> {
  let posts = Post::list(context.store(), data.community_id).await?;
  Ok(GetPostsResponse { posts })
}
