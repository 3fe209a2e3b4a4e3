//! Poll, candidate and vote commands backed by [`VotingClient`].

use votingdapp::client::explorer;
use votingdapp::transaction::InitializePollParams;
use votingdapp::VotingClient;

pub async fn list_polls(client: &VotingClient) -> anyhow::Result<()> {
    let polls = client.polls().await?;
    if polls.is_empty() {
        println!("No polls found.");
        return Ok(());
    }

    println!("{:<46} {:<8} {:<12} {:<12} {:<6} DESCRIPTION", "ADDRESS", "ID", "START", "END", "CANDS");
    for (address, poll) in polls {
        println!(
            "{:<46} {:<8} {:<12} {:<12} {:<6} {}",
            address, poll.poll_id, poll.poll_start, poll.poll_end, poll.candidate_amount, poll.description
        );
    }
    Ok(())
}

pub async fn list_candidates(client: &VotingClient) -> anyhow::Result<()> {
    let candidates = client.candidates().await?;
    if candidates.is_empty() {
        println!("No candidates found.");
        return Ok(());
    }

    println!("{:<46} {:<32} VOTES", "ADDRESS", "NAME");
    for (address, candidate) in candidates {
        println!(
            "{:<46} {:<32} {}",
            address, candidate.candidate_name, candidate.candidate_votes
        );
    }
    Ok(())
}

pub async fn init_poll(
    client: &VotingClient,
    poll_id: u64,
    description: String,
    poll_start: u64,
    poll_end: u64,
) -> anyhow::Result<()> {
    let signature = client
        .initialize_poll(InitializePollParams {
            poll_id,
            description,
            poll_start,
            poll_end,
        })
        .await?;
    print_transaction(client, &signature.to_string());
    Ok(())
}

pub async fn add_candidate(client: &VotingClient, poll_id: u64, name: &str) -> anyhow::Result<()> {
    let signature = client.initialize_candidate(poll_id, name).await?;
    print_transaction(client, &signature.to_string());
    Ok(())
}

pub async fn vote(client: &VotingClient, poll_id: u64, name: &str) -> anyhow::Result<()> {
    let signature = client.vote(poll_id, name).await?;
    print_transaction(client, &signature.to_string());

    let candidate = client.candidate(poll_id, name).await?;
    println!("{} now has {} vote(s)", candidate.candidate_name, candidate.candidate_votes);
    Ok(())
}

fn print_transaction(client: &VotingClient, signature: &str) {
    println!("Transaction sent: {}", signature);
    println!("{}", explorer::transaction_url(client.cluster(), signature));
}
