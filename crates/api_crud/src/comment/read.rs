use talkuvo_api_common::{
  comment::{GetComments, GetCommentsResponse},
  context::TalkuvoContext,
};
use talkuvo_db_schema::source::comment::Comment;
use talkuvo_utils::error::TalkuvoResult;

/// The comments under a post, oldest first.
pub async fn get_comments(
  data: &GetComments,
  context: &TalkuvoContext,
) -> TalkuvoResult<GetCommentsResponse> {
  let comments = Comment::list_for_post(context.store(), data.post_id).await?;
  Ok(GetCommentsResponse { comments })
}
