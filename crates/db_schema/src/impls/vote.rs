use crate::{
  enums::VoteType,
  newtypes::{ProfileId, VoteId},
  source::vote::{Vote, VoteForm, VoteTarget},
  store::StoreClient,
  traits::Likeable,
  utils::now,
};
use async_trait::async_trait;
use talkuvo_utils::error::StoreError;
use uuid::Uuid;

impl Vote {
  pub const USER_FKEY: &'static str = "votes_user_id_fkey";
  pub const POST_FKEY: &'static str = "votes_post_id_fkey";
  pub const COMMENT_FKEY: &'static str = "votes_comment_id_fkey";

  /// Net score of a post or comment, upvotes minus downvotes.
  pub async fn score_for_target(
    store: &StoreClient,
    target: VoteTarget,
  ) -> Result<i64, StoreError> {
    Ok(
      store
        .tables()?
        .votes
        .iter()
        .filter(|v| matches_target(v, target))
        .map(|v| match v.vote_type {
          VoteType::Up => 1,
          VoteType::Down => -1,
        })
        .sum(),
    )
  }
}

fn matches_target(vote: &Vote, target: VoteTarget) -> bool {
  match target {
    VoteTarget::Post(post_id) => vote.post_id == Some(post_id),
    VoteTarget::Comment(comment_id) => vote.comment_id == Some(comment_id),
  }
}

#[async_trait]
impl Likeable for Vote {
  type Form = VoteForm;

  /// Upsert on (user, target): a second vote replaces the first instead of
  /// stacking.
  async fn like(store: &StoreClient, form: &Self::Form) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    if !tables.profiles.iter().any(|p| p.id == form.user_id) {
      return Err(StoreError::ForeignKeyViolation(Self::USER_FKEY));
    }
    match form.target {
      VoteTarget::Post(post_id) => {
        if !tables.posts.iter().any(|p| p.id == post_id) {
          return Err(StoreError::ForeignKeyViolation(Self::POST_FKEY));
        }
      }
      VoteTarget::Comment(comment_id) => {
        if !tables.comments.iter().any(|c| c.id == comment_id) {
          return Err(StoreError::ForeignKeyViolation(Self::COMMENT_FKEY));
        }
      }
    }

    if let Some(existing) = tables
      .votes
      .iter_mut()
      .find(|v| v.user_id == form.user_id && matches_target(v, form.target))
    {
      existing.vote_type = form.vote_type;
      return Ok(existing.clone());
    }

    let vote = Vote {
      id: VoteId(Uuid::new_v4()),
      user_id: form.user_id,
      post_id: match form.target {
        VoteTarget::Post(post_id) => Some(post_id),
        VoteTarget::Comment(_) => None,
      },
      comment_id: match form.target {
        VoteTarget::Comment(comment_id) => Some(comment_id),
        VoteTarget::Post(_) => None,
      },
      vote_type: form.vote_type,
      created_at: now(),
    };
    tables.votes.push(vote.clone());
    Ok(vote)
  }

  async fn remove(
    store: &StoreClient,
    user_id: ProfileId,
    target: VoteTarget,
  ) -> Result<usize, StoreError> {
    let mut tables = store.tables()?;
    let before = tables.votes.len();
    tables
      .votes
      .retain(|v| !(v.user_id == user_id && matches_target(v, target)));
    Ok(before - tables.votes.len())
  }
}
