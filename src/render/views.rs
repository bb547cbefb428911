//! Region templates
//!
//! Every template interpolates server text through maud, so names and
//! descriptions are HTML-escaped.

use maud::{html, Markup};
use std::fmt::Display;

use super::format::{money, sale_date};
use crate::api::{Dashboard, History, Product, Store};

/// Placeholder shown while a region is being fetched
pub fn loading() -> Markup {
    html! {
        div class="loading" {}
        " Carregando..."
    }
}

/// Banner text; the status class is applied by the banner scheduler
pub fn banner(text: &str) -> Markup {
    html! { (text) }
}

/// Error line for a region whose fetch failed (`what` is e.g. "lojas")
pub fn load_error(what: &str, error: &dyn Display) -> Markup {
    html! {
        p class="error" { "❌ Erro ao carregar " (what) ": " (error.to_string()) }
    }
}

pub fn store_list(stores: &[Store]) -> Markup {
    html! {
        @if stores.is_empty() {
            p { "Nenhuma loja cadastrada ainda" }
        } @else {
            h3 { "🏪 Lojas Cadastradas (" (stores.len()) ")" }
            @for loja in stores {
                p class="card-hover" {
                    strong { "ID: " (loja.id) } " - " (loja.nome)
                    br;
                    small { "📝 " (loja.descricao) }
                    br;
                    small { "📍 " (loja.endereco) }
                    br;
                    small { "📞 " (loja.contato) }
                }
            }
        }
    }
}

pub fn store_not_found() -> Markup {
    html! {
        p class="error" { "❌ Loja não encontrada" }
    }
}

/// Store info, stock and recent sales; not-found when `loja` is absent
pub fn dashboard(data: &Dashboard) -> Markup {
    let Some(loja) = &data.loja else {
        return store_not_found();
    };

    html! {
        div class="dashboard-section" {
            h3 { "🏪 Informações da Loja" }
            p { strong { "Nome:" } " " (loja.nome) }
            p { strong { "Descrição:" } " " (loja.descricao) }
            p { strong { "Endereço:" } " " (loja.endereco) }
            p { strong { "Contato:" } " " (loja.contato) }
        }

        div class="dashboard-section" {
            h3 { "📦 Estoque (" (data.estoque.len()) " produtos)" }
            @if data.estoque.is_empty() {
                p { "Nenhum produto em estoque" }
            } @else {
                @for item in &data.estoque {
                    div class="historico-item" {
                        strong { (item.produto_nome) }
                        br;
                        "Categoria: " (item.categoria_nome.as_deref().unwrap_or("N/A"))
                        br;
                        "Quantidade: " (item.quantidade_estoque) " unidades"
                        br;
                        "Preço: R$ " (money(item.preco_loja))
                    }
                }
            }
        }

        div class="dashboard-section" {
            h3 { "💰 Vendas Recentes (" (data.vendas.len()) ")" }
            @if data.vendas.is_empty() {
                p { "Nenhuma venda registrada" }
            } @else {
                @for venda in &data.vendas {
                    div class="historico-item" {
                        strong { (venda.produto_nome) }
                        br;
                        "Quantidade: " (venda.quantidade)
                        br;
                        "Valor Total: R$ " (money(venda.valor_total))
                        br;
                        "Data: " (sale_date(venda))
                    }
                }
            }
        }
    }
}

/// Global sales feed; an empty feed is the empty state, never a zero header
pub fn history(data: &History) -> Markup {
    html! {
        @if data.historico.is_empty() {
            p { "📋 Nenhuma venda registrada ainda" }
        } @else {
            h3 { "📊 Histórico de Vendas (" (data.total_vendas) " vendas)" }
            @for venda in &data.historico {
                div class="historico-item" {
                    strong { "🏪 " (venda.loja_nome) } " - 📦 " (venda.produto_nome)
                    br;
                    "Quantidade: " (venda.quantidade) " | Valor: R$ " (money(venda.valor_total))
                    br;
                    small { "🕒 " (venda.data_formatada) }
                }
            }
        }
    }
}

pub fn product_list(products: &[Product]) -> Markup {
    html! {
        @if products.is_empty() {
            p { "Nenhum produto cadastrado" }
        } @else {
            h3 { "📦 Produtos Disponíveis (" (products.len()) ")" }
            @for produto in products {
                div class="historico-item" {
                    strong { "ID: " (produto.id) } " - " (produto.nome)
                    br;
                    @if let Some(descricao) = &produto.descricao {
                        small { "📝 " (descricao) }
                        br;
                    }
                    "Categoria: " (produto.categoria_nome.as_deref().unwrap_or("N/A"))
                    @if produto.preco.is_some() {
                        br;
                        "Preço: R$ " (money(produto.preco))
                    }
                }
            }
        }
    }
}
