//! `/removegame` command with its selection menu.

use crate::channel::SerenityChannel;
use crate::framework::{reply_private, Context, Error};
use crate::handlers::{apply_remove, commit, removal_options, NOTHING_TRACKED};
use crate::permissions::admin_only;
use poise::serenity_prelude as serenity;
use statusboard_board::Status;
use statusboard_common::UserId;
use tracing::{info, warn};

/// Title of the removal prompt.
pub const REMOVAL_TITLE: &str = "🗑️ Remove Games";

/// Accent colour of the removal prompt.
pub const REMOVAL_COLOUR: u32 = 0x00FF_6B6B;

/// Builds the select menu offering `options` for removal.
pub fn removal_menu(custom_id: &str, options: &[(String, Status)]) -> serenity::CreateSelectMenu {
    let choices = options
        .iter()
        .map(|(name, status)| {
            serenity::CreateSelectMenuOption::new(name.clone(), name.clone())
                .description(format!("Status: {}", status.label()))
                .emoji(serenity::ReactionType::Unicode(status.symbol().to_string()))
        })
        .collect();

    let max = u8::try_from(options.len()).unwrap_or(u8::MAX);
    serenity::CreateSelectMenu::new(
        custom_id,
        serenity::CreateSelectMenuKind::String { options: choices },
    )
    .placeholder("Choose games to remove...")
    .min_values(1)
    .max_values(max)
}

fn removal_embed() -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(REMOVAL_TITLE)
        .description("Select one or more games to remove from tracking:")
        .colour(REMOVAL_COLOUR)
}

/// Remove games from tracking
#[poise::command(slash_command, rename = "removegame", check = "admin_only")]
pub async fn remove_game(ctx: Context<'_>) -> Result<(), Error> {
    info!("/removegame by user {}", ctx.author().id);

    let data = ctx.data();
    let options = removal_options(&data.store.load().await);
    if options.is_empty() {
        return reply_private(ctx, NOTHING_TRACKED).await;
    }

    let session = ctx.id();
    let user = UserId(ctx.author().id.get());
    let custom_id = format!("removegame:{session}");
    data.selections.open(
        session,
        user,
        options.iter().map(|(name, _)| name.clone()).collect(),
    );

    ctx.send(
        poise::CreateReply::default()
            .embed(removal_embed())
            .components(vec![serenity::CreateActionRow::SelectMenu(removal_menu(
                &custom_id, &options,
            ))])
            .ephemeral(true),
    )
    .await?;

    let filter_id = custom_id.clone();
    let Some(interaction) = serenity::ComponentInteractionCollector::new(ctx)
        .author_id(ctx.author().id)
        .filter(move |mci| mci.data.custom_id == filter_id)
        .timeout(data.selections.ttl())
        .await
    else {
        data.selections.discard(session);
        info!("Removal selection {} expired without a response", session);
        return Ok(());
    };

    let chosen = match &interaction.data.kind {
        serenity::ComponentInteractionDataKind::StringSelect { values } => values.clone(),
        _ => Vec::new(),
    };

    interaction
        .create_response(ctx, serenity::CreateInteractionResponse::Acknowledge)
        .await?;

    let reply = match data.selections.take(session, user, &chosen) {
        Ok(names) => {
            let _guard = data.store.lock().await;
            let mut state = data.store.load().await;
            let transition = apply_remove(&mut state, &names);
            commit(&data.store, &mut state, transition, &SerenityChannel::for_context(ctx)).await?
        }
        Err(e) => {
            warn!("Removal selection {} rejected: {}", session, e);
            format!("❌ {e}")
        }
    };

    interaction
        .edit_response(
            ctx,
            serenity::EditInteractionResponse::new()
                .content(reply)
                .embeds(Vec::new())
                .components(Vec::new()),
        )
        .await?;
    Ok(())
}
