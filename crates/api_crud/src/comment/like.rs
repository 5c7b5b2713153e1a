use crate::require_profile;
use talkuvo_api_common::{comment::CreateCommentVote, context::TalkuvoContext, SuccessResponse};
use talkuvo_db_schema::{
  source::{
    comment::Comment,
    vote::{Vote, VoteForm, VoteTarget},
  },
  traits::{Crud, Likeable},
};
use talkuvo_utils::error::TalkuvoResult;

/// Cast, change or (with `vote_type: None`) retract a vote on a comment.
pub async fn vote_comment(
  data: &CreateCommentVote,
  context: &TalkuvoContext,
) -> TalkuvoResult<SuccessResponse> {
  let voter = require_profile(context).await?;
  let comment = Comment::read(context.store(), data.comment_id).await?;
  let target = VoteTarget::Comment(comment.id);

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

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use crate::comment::create::{create_comment, tests::context_with_post};
  use pretty_assertions::assert_eq;
  use talkuvo_api_common::comment::CreateComment;
  use talkuvo_db_schema::enums::VoteType;

  #[tokio::test]
  async fn comment_votes_are_independent_of_post_votes() {
    let (context, post_id) = context_with_post().await;
    let comment = create_comment(
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

    vote_comment(
      &CreateCommentVote {
        comment_id: comment.id,
        vote_type: Some(VoteType::Up),
      },
      &context,
    )
    .await
    .unwrap();

    assert_eq!(
      1,
      Vote::score_for_target(context.store(), VoteTarget::Comment(comment.id))
        .await
        .unwrap()
    );
    assert_eq!(
      0,
      Vote::score_for_target(context.store(), VoteTarget::Post(post_id))
        .await
        .unwrap()
    );
  }
}
