use std::collections::{HashMap, HashSet};

use super::prelude::*;

/// Counts the votes per tag.
///
/// The result is ordered by the number of votes (descending)
/// and then by tag id. Tags voted by the viewer are flagged.
pub fn aggregate_tag_stats(votes: Vec<(Vote, Tag)>, viewer_votes: &[Vote]) -> Vec<TagStat> {
    let viewer_tags: HashSet<&Id> = viewer_votes.iter().map(|v| &v.tag_id).collect();
    let mut stats: HashMap<Id, TagStat> = HashMap::new();
    for (_, tag) in votes {
        stats
            .entry(tag.id.clone())
            .or_insert_with(|| TagStat {
                viewer_voted: viewer_tags.contains(&tag.id),
                tag_id: tag.id,
                name: tag.name_vi,
                vote_count: 0,
            })
            .vote_count += 1;
    }
    let mut stats: Vec<_> = stats.into_values().collect();
    stats.sort_by(|a, b| {
        b.vote_count
            .cmp(&a.vote_count)
            .then_with(|| a.tag_id.cmp(&b.tag_id))
    });
    stats
}

pub fn tag_stats<R>(repo: &R, location_id: &str, viewer: Option<&Id>) -> Result<Vec<TagStat>>
where
    R: TagVoteRepo,
{
    let votes = repo.votes_with_tags_of_location(location_id)?;
    let viewer_votes = match viewer {
        Some(user_id) => repo.votes_of_user_for_location(location_id, user_id.as_str())?,
        None => vec![],
    };
    Ok(aggregate_tag_stats(votes, &viewer_votes))
}
