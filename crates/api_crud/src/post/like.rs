use crate::require_profile;
use talkuvo_api_common::{context::TalkuvoContext, post::CreatePostVote, SuccessResponse};
use talkuvo_db_schema::{
  source::{
    post::Post,
    vote::{Vote, VoteForm, VoteTarget},
  },
  traits::{Crud, Likeable},
};
use talkuvo_utils::error::TalkuvoResult;

/// Cast, change or (with `vote_type: None`) retract a vote on a post.
pub async fn vote_post(
  data: &CreatePostVote,
  context: &TalkuvoContext,
) -> TalkuvoResult<SuccessResponse> {
  let voter = require_profile(context).await?;
  let post = Post::read(context.store(), data.post_id).await?;
  let target = VoteTarget::Post(post.id);

  match data.vote_type {
    Some(vote_type) => {
      let form = VoteForm {
        user_id: voter.id,
        target,
        vote_type,
      };
      Vote::like(context.store(), &form).await?;
    }
    None => {
      Vote::remove(context.store(), voter.id, target).await?;
    }
  }
  Ok(SuccessResponse::default())
}
